use crate::foundation::error::{ScrollcueError, ScrollcueResult};

/// Workspace the CRM files studio leads under.
pub const DEFAULT_WORKSPACE: &str = "StoryCruz Films";

/// Lead payload accepted by the CRM contact-form endpoint.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmLead {
    /// Client name, both partners for weddings.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Human-readable project label.
    pub project_type: String,
    /// Event date as entered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    /// Venue or city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Assembled free-text message.
    pub message: String,
    /// CRM workspace the lead is filed under.
    pub workspace_name: String,
}

/// `"Alex & Sam"` when a partner is named, else the primary name alone.
pub fn couple_name(full_name: &str, partner_name: &str) -> String {
    let full = full_name.trim();
    let partner = partner_name.trim();
    if partner.is_empty() {
        full.to_string()
    } else {
        format!("{full} & {partner}")
    }
}

/// Response contract shared by the CRM relay and the content-store create endpoint.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionResponse {
    /// Whether the endpoint accepted the submission.
    pub success: bool,
    /// Created document id.
    pub id: Option<String>,
    /// Created lead id.
    pub lead_id: Option<String>,
    /// CRM conversation id.
    pub conversation_id: Option<String>,
    /// Error detail on failure.
    pub error: Option<String>,
}

impl SubmissionResponse {
    /// Document id or lead id, whichever the endpoint returned.
    pub fn reference(&self) -> Option<&str> {
        self.id.as_deref().or(self.lead_id.as_deref())
    }
}

/// Status and raw body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

impl HttpReply {
    /// Return `true` for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound JSON POST to a form endpoint.
pub trait CrmTransport {
    /// POST `body` as JSON. Transport failures are [`ScrollcueError::Fetch`].
    fn post_json(&self, body: &serde_json::Value) -> ScrollcueResult<HttpReply>;
}

/// POST `payload` and interpret the reply. Non-2xx, an unreadable body, or
/// `success: false` all come back as [`ScrollcueError::Fetch`]. No retries.
pub fn submit<P: serde::Serialize>(
    transport: &dyn CrmTransport,
    payload: &P,
) -> ScrollcueResult<SubmissionResponse> {
    let body = serde_json::to_value(payload)
        .map_err(|e| ScrollcueError::serde(format!("encode inquiry: {e}")))?;
    let reply = transport.post_json(&body)?;

    let parsed: SubmissionResponse = serde_json::from_str(&reply.body).unwrap_or_default();
    if !reply.is_success() || !parsed.success {
        let detail = parsed.error.as_deref().unwrap_or("no detail");
        tracing::error!(status = reply.status, detail, "inquiry endpoint rejected submission");
        return Err(ScrollcueError::fetch(format!(
            "inquiry endpoint returned {} ({detail})",
            reply.status
        )));
    }
    Ok(parsed)
}

#[cfg(test)]
#[path = "../../tests/unit/inquiry/crm.rs"]
mod tests;
