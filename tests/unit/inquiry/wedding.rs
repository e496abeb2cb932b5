use super::*;

fn filled_form() -> WeddingInquiry {
    WeddingInquiry {
        full_name: "Alex".into(),
        partner_name: "Sam".into(),
        email: "alex@example.com".into(),
        phone: "".into(),
        service_type: Some(ServiceType::Photography),
        project_type: Some(ProjectType::Wedding),
        referral_source: vec!["Instagram".into(), "Google".into()],
        event_date: "2027-06-12".into(),
        location: "Tagaytay".into(),
        estimated_budget: "".into(),
        project_details: "Garden ceremony".into(),
    }
}

#[test]
fn steps_require_their_fields() {
    let mut form = WeddingInquiry::default();
    assert_eq!(form.steps().len(), 3);
    assert!(!form.can_proceed(0));
    form.full_name = "Alex".into();
    form.email = "  ".into();
    assert!(!form.can_proceed(0));
    form.email = "alex@example.com".into();
    assert!(form.can_proceed(0));

    assert!(!form.can_proceed(1));
    form.service_type = Some(ServiceType::Videography);
    form.project_type = Some(ProjectType::Debut);
    assert!(!form.can_proceed(1));
    form.event_date = "2027-01-01".into();
    assert!(form.can_proceed(1));

    assert!(!form.can_proceed(2));
}

#[test]
fn toggling_referral_adds_then_removes() {
    let mut form = WeddingInquiry::default();
    form.toggle_referral("Google");
    form.toggle_referral("Facebook");
    form.toggle_referral("Google");
    assert_eq!(form.referral_source, vec!["Facebook".to_string()]);
}

#[test]
fn lead_message_lists_present_fields() {
    let lead = filled_form().to_crm_lead("Studio");
    assert_eq!(lead.name, "Alex & Sam");
    assert_eq!(lead.project_type, "Wedding");
    assert_eq!(lead.phone, None);
    assert_eq!(lead.workspace_name, "Studio");
    assert_eq!(
        lead.message,
        "Service: Photography\n\
         Project type: Wedding\n\
         How they heard about us: Instagram, Google\n\
         Date of project or event: 2027-06-12\n\
         Location: Tagaytay\n\
         \nSpecific details:\nGarden ceremony"
    );
}

#[test]
fn missing_project_type_becomes_other() {
    let form = WeddingInquiry {
        full_name: "Alex".into(),
        email: "alex@example.com".into(),
        ..Default::default()
    };
    let lead = form.to_crm_lead("Studio");
    assert_eq!(lead.name, "Alex");
    assert_eq!(lead.project_type, "Other");
    assert!(lead.message.contains("Date of project or event: Not specified"));
    assert!(!lead.message.contains("Location:"));
}

#[test]
fn parses_kebab_case_choices() {
    let form: WeddingInquiry = serde_json::from_str(
        r#"{"fullName":"Alex","serviceType":"both","projectType":"real-estate"}"#,
    )
    .expect("parse");
    assert_eq!(form.service_type, Some(ServiceType::Both));
    assert_eq!(form.project_type.map(ProjectType::label), Some("Real Estate"));
}
