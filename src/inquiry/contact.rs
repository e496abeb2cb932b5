use crate::inquiry::{
    crm::{CrmLead, couple_name},
    filled, optional, toggle,
    wizard::{StepForm, StepInfo},
};

const STEPS: &[StepInfo] = &[
    StepInfo {
        id: "basics",
        label: "The Basics",
    },
    StepInfo {
        id: "event",
        label: "Your Event",
    },
    StepInfo {
        id: "services",
        label: "Services",
    },
    StepInfo {
        id: "details",
        label: "Details",
    },
    StepInfo {
        id: "investment",
        label: "Investment",
    },
];

/// Five-step general contact form that posts straight to the CRM.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInquiry {
    /// Primary contact.
    pub full_name: String,
    /// Partner, joined into the lead name.
    pub partner_name: String,
    /// Reply address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Kind of event.
    pub project_type: String,
    /// Event date as entered.
    pub event_date: String,
    /// Venue or city.
    pub location: String,
    /// Requested services.
    pub services: Vec<String>,
    /// Budget range.
    pub budget: String,
    /// Referral source.
    pub how_found: String,
    /// Free-text message.
    pub message: String,
}

impl StepForm for ContactInquiry {
    fn steps(&self) -> &'static [StepInfo] {
        STEPS
    }

    fn can_proceed(&self, step: usize) -> bool {
        match STEPS.get(step).map(|s| s.id) {
            Some("basics") => filled(&self.full_name) && filled(&self.email),
            Some("event") => filled(&self.project_type),
            Some("services") => !self.services.is_empty(),
            Some("investment") => filled(&self.budget),
            _ => true,
        }
    }
}

impl ContactInquiry {
    /// Add `service`, or remove it when already selected.
    pub fn toggle_service(&mut self, service: &str) {
        toggle(&mut self.services, service);
    }

    /// CRM lead with the extras appended to the message.
    pub fn to_crm_lead(&self, workspace: &str) -> CrmLead {
        let mut extra = Vec::new();
        if !self.services.is_empty() {
            extra.push(format!("Services interested in: {}", self.services.join(", ")));
        }
        if let Some(budget) = optional(&self.budget) {
            extra.push(format!("Budget range: {budget}"));
        }
        if let Some(how) = optional(&self.how_found) {
            extra.push(format!("How they found us: {how}"));
        }

        let mut message = self.message.clone();
        if !extra.is_empty() {
            message.push_str("\n\n---\n");
            message.push_str(&extra.join("\n"));
        }

        CrmLead {
            name: couple_name(&self.full_name, &self.partner_name),
            email: self.email.trim().to_string(),
            phone: optional(&self.phone),
            project_type: self.project_type.clone(),
            event_date: optional(&self.event_date),
            location: optional(&self.location),
            message,
            workspace_name: workspace.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/inquiry/contact.rs"]
mod tests;
