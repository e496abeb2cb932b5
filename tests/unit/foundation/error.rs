use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrollcueError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        ScrollcueError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(ScrollcueError::media("x").to_string().contains("media error:"));
    assert!(ScrollcueError::fetch("x").to_string().contains("fetch error:"));
    assert!(
        ScrollcueError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScrollcueError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
