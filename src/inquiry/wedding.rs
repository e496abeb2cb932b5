use crate::inquiry::{
    crm::{CrmLead, couple_name},
    filled, optional, toggle,
    wizard::{StepForm, StepInfo},
};

/// Coverage the couple is asking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    /// Stills only.
    Photography,
    /// Film only.
    Videography,
    /// Photo and film.
    Both,
}

impl ServiceType {
    /// Label used in the CRM message.
    pub fn label(self) -> &'static str {
        match self {
            Self::Photography => "Photography",
            Self::Videography => "Videography",
            Self::Both => "Both",
        }
    }
}

/// Kind of event or shoot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    /// Wedding day.
    Wedding,
    /// Debut celebration.
    Debut,
    /// Birthdays, showers and parties.
    Events,
    /// Brand and commercial work.
    CommercialBranding,
    /// Property shoots.
    RealEstate,
    /// Maternity, family and milestone sessions.
    Lifestyle,
}

impl ProjectType {
    /// Label used in the CRM message and lead project type.
    pub fn label(self) -> &'static str {
        match self {
            Self::Wedding => "Wedding",
            Self::Debut => "Debut",
            Self::Events => "Events (Birthdays, Baby Shower, Gender Reveal, Christmas Party)",
            Self::CommercialBranding => "Commercial Branding",
            Self::RealEstate => "Real Estate",
            Self::Lifestyle => {
                "Lifestyle (Maternity, Newborn, Family, Couple, Graduation, Cake Smash, Milestone)"
            }
        }
    }
}

/// Choices for "how did you hear about us".
pub const REFERRAL_OPTIONS: &[&str] = &[
    "Google",
    "Facebook",
    "Instagram",
    "Client Referral",
    "Vendor Referral",
    "Other",
];

const STEPS: &[StepInfo] = &[
    StepInfo {
        id: "info",
        label: "Your Info",
    },
    StepInfo {
        id: "project",
        label: "Project",
    },
    StepInfo {
        id: "details",
        label: "Details",
    },
];

/// Three-section wedding/event inquiry.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeddingInquiry {
    /// Primary contact.
    pub full_name: String,
    /// Partner, joined into the lead name.
    pub partner_name: String,
    /// Reply address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Requested coverage.
    pub service_type: Option<ServiceType>,
    /// Kind of event.
    pub project_type: Option<ProjectType>,
    /// Selected [`REFERRAL_OPTIONS`].
    pub referral_source: Vec<String>,
    /// Event date as entered.
    pub event_date: String,
    /// Venue or city.
    pub location: String,
    /// Budget range.
    pub estimated_budget: String,
    /// Free-text details.
    pub project_details: String,
}

impl StepForm for WeddingInquiry {
    fn steps(&self) -> &'static [StepInfo] {
        STEPS
    }

    fn can_proceed(&self, step: usize) -> bool {
        match step {
            0 => filled(&self.full_name) && filled(&self.email),
            1 => {
                self.service_type.is_some()
                    && self.project_type.is_some()
                    && filled(&self.event_date)
            }
            2 => filled(&self.project_details),
            _ => true,
        }
    }
}

impl WeddingInquiry {
    /// Add `source`, or remove it when already selected.
    pub fn toggle_referral(&mut self, source: &str) {
        toggle(&mut self.referral_source, source);
    }

    /// CRM lead with service, referral and details folded into the message.
    pub fn to_crm_lead(&self, workspace: &str) -> CrmLead {
        let service = self.service_type.map(ServiceType::label).unwrap_or_default();
        let project = self.project_type.map(ProjectType::label).unwrap_or_default();

        let mut lines = vec![
            format!("Service: {service}"),
            format!("Project type: {project}"),
        ];
        if !self.referral_source.is_empty() {
            lines.push(format!(
                "How they heard about us: {}",
                self.referral_source.join(", ")
            ));
        }
        lines.push(format!(
            "Date of project or event: {}",
            optional(&self.event_date).as_deref().unwrap_or("Not specified")
        ));
        if let Some(location) = optional(&self.location) {
            lines.push(format!("Location: {location}"));
        }
        if let Some(budget) = optional(&self.estimated_budget) {
            lines.push(format!("Estimated Budget: {budget}"));
        }
        if let Some(details) = optional(&self.project_details) {
            lines.push(format!("\nSpecific details:\n{details}"));
        }

        CrmLead {
            name: couple_name(&self.full_name, &self.partner_name),
            email: self.email.trim().to_string(),
            phone: optional(&self.phone),
            project_type: if project.is_empty() {
                "Other".to_string()
            } else {
                project.to_string()
            },
            event_date: optional(&self.event_date),
            location: optional(&self.location),
            message: lines.join("\n"),
            workspace_name: workspace.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/inquiry/wedding.rs"]
mod tests;
