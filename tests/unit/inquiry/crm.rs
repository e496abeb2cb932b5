use super::*;
use std::cell::RefCell;

struct FakeTransport {
    reply: HttpReply,
    sent: RefCell<Vec<serde_json::Value>>,
}

impl FakeTransport {
    fn new(status: u16, body: &str) -> Self {
        Self {
            reply: HttpReply {
                status,
                body: body.to_string(),
            },
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl CrmTransport for FakeTransport {
    fn post_json(&self, body: &serde_json::Value) -> ScrollcueResult<HttpReply> {
        self.sent.borrow_mut().push(body.clone());
        Ok(self.reply.clone())
    }
}

fn lead() -> CrmLead {
    CrmLead {
        name: couple_name("Alex", "Sam"),
        email: "alex@example.com".into(),
        phone: None,
        project_type: "Wedding".into(),
        event_date: Some("2027-06-12".into()),
        location: None,
        message: "Service: Both".into(),
        workspace_name: DEFAULT_WORKSPACE.into(),
    }
}

#[test]
fn payload_is_camel_case_without_empty_optionals() {
    let transport = FakeTransport::new(200, r#"{"success":true,"leadId":"L1"}"#);
    submit(&transport, &lead()).expect("submit");
    let sent = transport.sent.borrow();
    let body = &sent[0];
    assert_eq!(body["name"], "Alex & Sam");
    assert_eq!(body["projectType"], "Wedding");
    assert_eq!(body["eventDate"], "2027-06-12");
    assert_eq!(body["workspaceName"], "StoryCruz Films");
    assert!(body.get("phone").is_none());
    assert!(body.get("location").is_none());
}

#[test]
fn success_reply_exposes_reference() {
    let transport = FakeTransport::new(
        201,
        r#"{"success":true,"leadId":"L1","conversationId":"C9"}"#,
    );
    let response = submit(&transport, &lead()).expect("submit");
    assert_eq!(response.reference(), Some("L1"));
    assert_eq!(response.conversation_id.as_deref(), Some("C9"));
}

#[test]
fn rejections_become_fetch_errors() {
    for (status, body) in [
        (500, r#"{"success":false,"error":"boom"}"#),
        (200, r#"{"success":false}"#),
        (200, "<html>oops</html>"),
        (404, r#"{"success":true}"#),
    ] {
        let transport = FakeTransport::new(status, body);
        let err = submit(&transport, &lead()).expect_err("must fail");
        assert!(matches!(err, ScrollcueError::Fetch(_)), "{status} {body}");
    }
}

#[test]
fn couple_name_trims_partner() {
    assert_eq!(couple_name("Alex", "  "), "Alex");
    assert_eq!(couple_name(" Alex ", "Sam"), "Alex & Sam");
}
