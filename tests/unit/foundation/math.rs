use super::*;

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(50.0, 0.0, 0.0), 50.0);
    assert_eq!(lerp(50.0, 0.0, 1.0), 0.0);
    assert_eq!(lerp(0.0, -50.0, 0.5), -25.0);
}

#[test]
fn inverse_lerp_clamps_and_steps() {
    assert_eq!(inverse_lerp(0.2, 0.4, 0.1), 0.0);
    assert_eq!(inverse_lerp(0.2, 0.4, 0.5), 1.0);
    assert_eq!(inverse_lerp(0.3, 0.3, 0.3), 1.0);
    assert_eq!(inverse_lerp(0.3, 0.3, 0.2), 0.0);
}

#[test]
fn damp_moves_fraction_of_gap() {
    assert_eq!(damp(0.0, 1.0, 0.1), 0.1);
    assert_eq!(damp(0.5, 0.5, 0.3), 0.5);
    // factor is clamped, so it never overshoots
    assert_eq!(damp(0.0, 1.0, 3.0), 1.0);
}

#[test]
fn approx_eq_uses_inclusive_tolerance() {
    assert!(approx_eq(0.1 + 0.2, 0.3, 1e-12));
    assert!(approx_eq(1.0, 1.5, 0.5));
    assert!(!approx_eq(1.0, 1.5, 0.49));
}
