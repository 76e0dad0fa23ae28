//! Form submission flow.
//!
//! [`SubmitFlow::start`] runs the synchronous half of a submit against a
//! [`FormSurface`]: validate every required field, then either show one error
//! toast or put the submit control into its pending state. The backend call
//! happens elsewhere; [`SubmitFlow::complete`] applies its outcome. A started
//! submission carries a generation number and only the completion for the
//! latest generation is applied, so a newer submission of the same form
//! supersedes an older one.

use serde::Serialize;

use crate::toast::{Notify, Severity};

pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1500;

pub const SUBMIT_CONTROL_SELECTOR: &str = "button[type=\"submit\"]";
pub const PENDING_LABEL: &str = "Sending...";
pub const INVALID_FORM_MESSAGE: &str = "Please fill all required fields correctly";
pub const SUCCESS_MESSAGE: &str = "Thank you! We'll contact you soon.";
pub const FAILURE_MESSAGE: &str = "Sorry, we couldn't send your message. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

/// Named form values in document order, as a backend would receive them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormPayload {
    fields: Vec<FormField>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unnamed controls are not submitted, matching browser form encoding.
    pub fn push(&mut self, name: &str, value: impl Into<String>) {
        if name.is_empty() {
            return;
        }
        self.fields.push(FormField {
            name: name.to_string(),
            value: value.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }
}

/// The parts of a form a submission touches.
pub trait FormSurface {
    /// Validates and marks every required field. Every field is checked so
    /// every field gets its marker; returns whether all passed.
    fn validate_required(&mut self) -> bool;

    fn submit_label(&self) -> Option<String>;

    /// Disables the submit control and shows `label` on it.
    fn show_pending(&mut self, label: &str);

    /// Re-enables the submit control, putting `label` back when there is one.
    fn restore_control(&mut self, label: Option<&str>);

    fn reset(&mut self);

    fn payload(&self) -> FormPayload;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// At least one required field failed; show one error toast, touch nothing else.
    Rejected { message: &'static str },
    Started(SubmitTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    pub generation: u64,
    pub pending_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCompletion {
    pub severity: Severity,
    pub message: &'static str,
    pub reset_form: bool,
    /// Label to put back on the submit control, if it had one.
    pub restore_label: Option<String>,
}

#[derive(Debug, Clone)]
struct Pending {
    generation: u64,
    original_label: Option<String>,
}

#[derive(Debug, Default)]
pub struct SubmitFlow {
    generation: u64,
    pending: Option<Pending>,
}

impl SubmitFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// `current_label` is the submit control's text right now. When a
    /// submission is already in flight that text is the pending label, so the
    /// original captured by the first submission is kept.
    pub fn begin(&mut self, all_valid: bool, current_label: Option<String>) -> SubmitDecision {
        if !all_valid {
            return SubmitDecision::Rejected {
                message: INVALID_FORM_MESSAGE,
            };
        }

        self.generation += 1;
        let original_label = match self.pending.take() {
            Some(prev) => prev.original_label,
            None => current_label,
        };
        self.pending = Some(Pending {
            generation: self.generation,
            original_label,
        });

        SubmitDecision::Started(SubmitTicket {
            generation: self.generation,
            pending_label: PENDING_LABEL,
        })
    }

    /// Returns `None` for a superseded or already-finished generation.
    pub fn finish(
        &mut self,
        generation: u64,
        outcome: Result<(), String>,
    ) -> Option<SubmitCompletion> {
        match &self.pending {
            Some(p) if p.generation == generation => {}
            _ => return None,
        }
        let pending = self.pending.take()?;

        let completion = match outcome {
            Ok(()) => SubmitCompletion {
                severity: Severity::Success,
                message: SUCCESS_MESSAGE,
                reset_form: true,
                restore_label: pending.original_label,
            },
            Err(reason) => {
                tracing::warn!(%reason, "form submission failed");
                SubmitCompletion {
                    severity: Severity::Error,
                    message: FAILURE_MESSAGE,
                    reset_form: false,
                    restore_label: pending.original_label,
                }
            }
        };
        Some(completion)
    }

    /// Validates `form` and either rejects with one error toast or marks the
    /// control pending. A started submission returns its ticket and the
    /// payload to hand to the backend.
    pub fn start<F>(
        &mut self,
        form: &mut F,
        notifier: &dyn Notify,
    ) -> Option<(SubmitTicket, FormPayload)>
    where
        F: FormSurface + ?Sized,
    {
        let all_valid = form.validate_required();
        match self.begin(all_valid, form.submit_label()) {
            SubmitDecision::Rejected { message } => {
                tracing::debug!("form rejected: invalid required fields");
                notifier.notify(message, Severity::Error);
                None
            }
            SubmitDecision::Started(ticket) => {
                form.show_pending(ticket.pending_label);
                Some((ticket, form.payload()))
            }
        }
    }

    /// Applies the backend outcome for `generation`. Returns `false` and
    /// touches nothing when that submission was superseded.
    pub fn complete<F>(
        &mut self,
        form: &mut F,
        notifier: &dyn Notify,
        generation: u64,
        outcome: Result<(), String>,
    ) -> bool
    where
        F: FormSurface + ?Sized,
    {
        let Some(done) = self.finish(generation, outcome) else {
            return false;
        };
        notifier.notify(done.message, done.severity);
        if done.reset_form {
            form.reset();
        }
        form.restore_control(done.restore_label.as_deref());
        true
    }
}
