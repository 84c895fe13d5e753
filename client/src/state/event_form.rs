//! Two-step "Create new Event" form.
//!
//! DESIGN
//! ======
//! Step one validates a Google Form id against the API. Only once a non-empty
//! question list comes back are the detail fields unlocked, and the id input
//! stays locked until [`NewEventForm::reset`]. Step two collects name,
//! location and both dates; dates are submitted as epoch-second strings at
//! UTC midnight.

#[cfg(test)]
#[path = "event_form_test.rs"]
mod event_form_test;

use chrono::NaiveDate;
use serde_json::Value;

use crate::net::outcome::ApiOutcome;
use crate::net::types::{CreateEventRequest, GoogleFormQuestion};

pub const FORM_ID_REQUIRED_MESSAGE: &str = "Google Form ID is required.";
pub const FORM_EMPTY_MESSAGE: &str = "Google Form has no questions.";

/// Result of a create-event submission, as the dialog should act on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitResult {
    /// Close the dialog and refresh the events list.
    Created,
    /// Show the message in a blocking alert.
    Rejected(String),
    Unauthorized,
    /// Kept in [`NewEventForm::submit_error`] and shown above the actions;
    /// the form stays as it was.
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewEventForm {
    pub google_form_id: String,
    pub name: String,
    pub location: String,
    pub preregister_date: Option<NaiveDate>,
    pub event_date: Option<NaiveDate>,
    questions: Vec<GoogleFormQuestion>,
    form_error: Option<String>,
    submit_error: Option<String>,
    validating: bool,
    submitting: bool,
}

impl NewEventForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form reference has been accepted; detail fields are editable.
    pub fn form_accepted(&self) -> bool {
        !self.questions.is_empty()
    }

    pub fn questions(&self) -> &[GoogleFormQuestion] {
        &self.questions
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Last create-event failure that was neither a rejection nor a 401.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_validating(&self) -> bool {
        self.validating
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn form_id_locked(&self) -> bool {
        self.form_accepted() || self.validating
    }

    /// Start validating the form id. Returns the id to send.
    pub fn begin_validation(&mut self) -> Option<String> {
        if self.form_id_locked() {
            return None;
        }
        let id = self.google_form_id.trim().to_owned();
        if id.is_empty() {
            self.form_error = Some(FORM_ID_REQUIRED_MESSAGE.to_owned());
            return None;
        }
        self.form_error = None;
        self.validating = true;
        Some(id)
    }

    /// Returns `true` when the outcome was a `401`.
    pub fn apply_validation(&mut self, outcome: ApiOutcome<Option<Vec<GoogleFormQuestion>>>) -> bool {
        self.validating = false;
        match outcome {
            ApiOutcome::Success(Some(questions)) if !questions.is_empty() => {
                self.form_error = None;
                self.questions = questions;
                false
            }
            ApiOutcome::Success(_) => {
                self.form_error = Some(FORM_EMPTY_MESSAGE.to_owned());
                false
            }
            other => {
                let unauthorized = other.is_unauthorized();
                self.form_error = other.message().map(str::to_owned);
                unauthorized
            }
        }
    }

    /// Unlock the form id and drop everything learned from it.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Name, location and both dates are set.
    pub fn details_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.location.trim().is_empty()
            && self.preregister_date.is_some()
            && self.event_date.is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.form_accepted() && self.details_complete() && !self.submitting
    }

    /// Build the payload and mark the submission in flight.
    pub fn begin_submit(&mut self) -> Option<CreateEventRequest> {
        if !self.can_submit() {
            return None;
        }
        let request = CreateEventRequest {
            google_form_id: self.google_form_id.trim().to_owned(),
            name: self.name.trim().to_owned(),
            preregister_date: epoch_string(self.preregister_date?),
            event_date: epoch_string(self.event_date?),
            location: self.location.trim().to_owned(),
        };
        self.submit_error = None;
        self.submitting = true;
        Some(request)
    }

    pub fn apply_submit(&mut self, outcome: ApiOutcome<Value>) -> SubmitResult {
        self.submitting = false;
        match outcome {
            ApiOutcome::Success(_) => {
                self.reset();
                SubmitResult::Created
            }
            ApiOutcome::ValidationError(msg) => SubmitResult::Rejected(msg),
            ApiOutcome::Unauthorized => SubmitResult::Unauthorized,
            other => {
                let message = other.message().unwrap_or_default().to_owned();
                self.submit_error = Some(message.clone());
                SubmitResult::Failed(message)
            }
        }
    }
}

/// Parse the `YYYY-MM-DD` value of a date input. Blank means unset.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Epoch seconds at UTC midnight, as the decimal string the API expects.
pub fn epoch_string(date: NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default()
        .to_string()
}
