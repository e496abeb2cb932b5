use crate::foundation::error::{ScrollcueError, ScrollcueResult};

/// User-facing message for any failed submission.
pub const GENERIC_SUBMIT_ERROR: &str =
    "There was an error submitting your inquiry. Please try again.";

/// Identifier and heading of one form step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepInfo {
    /// Stable step id.
    pub id: &'static str,
    /// Heading shown to the user.
    pub label: &'static str,
}

/// A form split into ordered steps, each gated by its own required fields.
pub trait StepForm {
    /// Steps in order. Never empty.
    fn steps(&self) -> &'static [StepInfo];
    /// Return `true` when the required fields of `step` are filled.
    fn can_proceed(&self, step: usize) -> bool;
}

/// Outcome of the last submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Nothing sent yet.
    Idle,
    /// Request in flight.
    Submitting,
    /// Accepted by the endpoint.
    Succeeded {
        /// Lead or document id, if returned.
        reference: Option<String>,
    },
    /// Rejected or unreachable.
    Failed {
        /// Message to show the user.
        message: String,
    },
}

/// Step navigation and submission state for a [`StepForm`].
#[derive(Clone, Debug)]
pub struct Wizard<F> {
    form: F,
    current: usize,
    status: SubmitStatus,
}

impl<F: StepForm> Wizard<F> {
    /// Wizard on the first step.
    pub fn new(form: F) -> Self {
        Self {
            form,
            current: 0,
            status: SubmitStatus::Idle,
        }
    }

    /// Form being filled.
    pub fn form(&self) -> &F {
        &self.form
    }

    /// Mutable access for field updates.
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// Index of the current step.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Current step.
    pub fn current_step(&self) -> StepInfo {
        self.form.steps()[self.current]
    }

    /// Submission status.
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Return `true` on the final step.
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.form.steps().len()
    }

    /// Whether the current step is complete.
    pub fn can_proceed(&self) -> bool {
        self.form.can_proceed(self.current)
    }

    /// Advance when the current step is complete. Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        if self.is_last() || !self.can_proceed() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Go back one step. Returns whether the step changed.
    pub fn back(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Jump to an already-visited step.
    pub fn go_to(&mut self, id: &str) -> bool {
        match self.form.steps().iter().position(|s| s.id == id) {
            Some(idx) if idx <= self.current => {
                self.current = idx;
                true
            }
            _ => false,
        }
    }

    /// Return `true` on a complete final step with no request in flight.
    pub fn can_submit(&self) -> bool {
        self.is_last() && self.can_proceed() && self.status != SubmitStatus::Submitting
    }

    /// Run `send` if the form is ready, recording the outcome. Failures keep the form
    /// filled in so the user can retry.
    pub fn submit_with<S>(&mut self, send: S) -> ScrollcueResult<()>
    where
        S: FnOnce(&F) -> ScrollcueResult<Option<String>>,
    {
        if !self.can_submit() {
            return Err(ScrollcueError::configuration(format!(
                "form is not ready to submit at step '{}'",
                self.current_step().id
            )));
        }
        self.status = SubmitStatus::Submitting;
        match send(&self.form) {
            Ok(reference) => {
                self.status = SubmitStatus::Succeeded { reference };
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "inquiry submission failed");
                self.status = SubmitStatus::Failed {
                    message: GENERIC_SUBMIT_ERROR.to_string(),
                };
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/inquiry/wizard.rs"]
mod tests;
