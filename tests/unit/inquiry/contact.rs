use super::*;

#[test]
fn five_steps_with_open_details() {
    let mut form = ContactInquiry::default();
    assert_eq!(form.steps().len(), 5);
    assert!(!form.can_proceed(0));
    assert!(!form.can_proceed(1));
    assert!(!form.can_proceed(2));
    assert!(form.can_proceed(3));
    assert!(!form.can_proceed(4));

    form.full_name = "Alex".into();
    form.email = "alex@example.com".into();
    form.project_type = "Wedding".into();
    form.toggle_service("Photography");
    form.budget = "$3k-$5k".into();
    assert!((0..5).all(|step| form.can_proceed(step)));

    form.toggle_service("Photography");
    assert!(!form.can_proceed(2));
}

#[test]
fn lead_appends_summary_block() {
    let mut form = ContactInquiry {
        full_name: "Alex".into(),
        email: "alex@example.com".into(),
        project_type: "Wedding".into(),
        budget: "$3k-$5k".into(),
        how_found: "Instagram".into(),
        message: "Hello!".into(),
        ..Default::default()
    };
    form.toggle_service("Photography");
    form.toggle_service("Drone");

    let lead = form.to_crm_lead(crate::inquiry::crm::DEFAULT_WORKSPACE);
    assert_eq!(
        lead.message,
        "Hello!\n\n---\nServices interested in: Photography, Drone\nBudget range: $3k-$5k\nHow they found us: Instagram"
    );
    assert_eq!(lead.workspace_name, "StoryCruz Films");
}

#[test]
fn lead_message_untouched_without_extras() {
    let form = ContactInquiry {
        full_name: "Alex".into(),
        message: "Just saying hi".into(),
        ..Default::default()
    };
    assert_eq!(form.to_crm_lead("Studio").message, "Just saying hi");
}
