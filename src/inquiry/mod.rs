pub(crate) mod commercial;
pub(crate) mod contact;
pub(crate) mod crm;
pub(crate) mod wedding;
pub(crate) mod wizard;

fn filled(s: &str) -> bool {
    !s.trim().is_empty()
}

fn optional(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}
