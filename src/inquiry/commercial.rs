use crate::inquiry::{
    filled,
    wizard::{StepForm, StepInfo},
};

/// Deliverable mix for a commercial brief.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommercialService {
    /// Stills only.
    Photography,
    /// Film only.
    Video,
    /// Stills and film.
    FullPackage,
}

const STEPS: &[StepInfo] = &[
    StepInfo {
        id: "basics",
        label: "The Basics",
    },
    StepInfo {
        id: "scope",
        label: "Project Scope",
    },
    StepInfo {
        id: "production",
        label: "Production Details",
    },
    StepInfo {
        id: "licensing",
        label: "Licensing & Usage",
    },
    StepInfo {
        id: "investment",
        label: "Investment",
    },
];

/// Commercial production brief, stored as a content-store document rather than a CRM lead.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommercialInquiry {
    /// Brand or company.
    pub company_name: String,
    /// Person to reply to.
    pub contact_person: String,
    /// Reply address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Company website.
    pub website: String,
    /// Desired delivery timeline.
    pub timeline: String,
    /// Requested deliverables.
    pub service_type: Option<CommercialService>,
    /// What the campaign should achieve.
    pub project_goal: String,
    /// Number of photos or videos expected.
    pub estimated_assets: String,
    /// Studio, on-location or both.
    pub location: Vec<String>,
    /// Talent the client provides or needs.
    pub talent: Vec<String>,
    /// Brief description.
    pub project_description: String,
    /// Reference links; blank rows are dropped on submit.
    pub inspiration_links: Vec<String>,
    /// Licensed music needed (video only).
    pub music_licensing: bool,
    /// Voiceover needed (video only).
    pub voiceover: bool,
    /// Where the assets will run.
    pub usage_types: Vec<String>,
    /// How long the usage license lasts.
    pub usage_duration: String,
    /// Budget range.
    pub budget: String,
    /// Anything else.
    pub additional_notes: String,
}

impl Default for CommercialInquiry {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            website: String::new(),
            timeline: String::new(),
            service_type: None,
            project_goal: String::new(),
            estimated_assets: String::new(),
            location: Vec::new(),
            talent: Vec::new(),
            project_description: String::new(),
            // One blank row for the first link input.
            inspiration_links: vec![String::new()],
            music_licensing: false,
            voiceover: false,
            usage_types: Vec::new(),
            usage_duration: String::new(),
            budget: String::new(),
            additional_notes: String::new(),
        }
    }
}

impl StepForm for CommercialInquiry {
    fn steps(&self) -> &'static [StepInfo] {
        STEPS
    }

    fn can_proceed(&self, step: usize) -> bool {
        match step {
            0 => {
                filled(&self.company_name) && filled(&self.contact_person) && filled(&self.email)
            }
            1 => self.service_type.is_some() && filled(&self.project_goal),
            2 => !self.location.is_empty() && filled(&self.project_description),
            3 => !self.usage_types.is_empty() && filled(&self.usage_duration),
            4 => filled(&self.budget),
            _ => true,
        }
    }
}

/// Document written to the content store for a commercial inquiry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommercialDocument {
    /// Content-store document type, `commercialInquiry`.
    #[serde(rename = "_type")]
    pub doc_type: String,
    /// Pipeline status, `new` on creation.
    pub status: String,
    /// Brief fields, flattened into the document.
    #[serde(flatten)]
    pub inquiry: CommercialInquiry,
    /// Submission timestamp, RFC 3339.
    pub submitted_at: String,
}

impl CommercialInquiry {
    /// Video-only questions (music licensing, voiceover) apply.
    pub fn includes_video(&self) -> bool {
        matches!(
            self.service_type,
            Some(CommercialService::Video | CommercialService::FullPackage)
        )
    }

    /// Append an empty link field for the form to fill.
    pub fn add_inspiration_link(&mut self) {
        self.inspiration_links.push(String::new());
    }

    /// Content-store document with blank links removed.
    pub fn to_document(&self, submitted_at: impl Into<String>) -> CommercialDocument {
        let mut inquiry = self.clone();
        inquiry
            .inspiration_links
            .retain(|link| !link.trim().is_empty());
        CommercialDocument {
            doc_type: "commercialInquiry".to_string(),
            status: "new".to_string(),
            inquiry,
            submitted_at: submitted_at.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/inquiry/commercial.rs"]
mod tests;
