//! Approve/decline form for one participant.
//!
//! Input is checked locally before any request: no status picked, or a
//! decline without a reason, produce a toast message and nothing is sent.

#[cfg(test)]
#[path = "status_action_test.rs"]
mod status_action_test;

use serde_json::Value;

use crate::net::api::payload_text;
use crate::net::outcome::ApiOutcome;
use crate::net::types::{ParticipantStatus, StatusUpdateRequest};

pub const STATUS_REQUIRED_MESSAGE: &str = "Please pick an status to do this action.";
pub const REASON_REQUIRED_MESSAGE: &str = "Please provide declined reason.";
pub const SAVE_LABEL: &str = "Save changes";
pub const BUSY_LABEL: &str = "Please wait...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusResult {
    /// Toast the server message, close the dialog, refresh the list.
    Updated(String),
    /// Sign out locally and return to `/admin`.
    Unauthorized,
    /// Toast the message; the dialog stays open.
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusAction {
    status: Option<ParticipantStatus>,
    pub reason: String,
    busy: bool,
}

impl StatusAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Option<&ParticipantStatus> {
        self.status.as_ref()
    }

    /// Set the choice from a `<select>` value. Only `approved` and
    /// `declined` are actionable.
    pub fn select(&mut self, raw: &str) {
        self.status = match ParticipantStatus::parse(raw) {
            status @ (ParticipantStatus::Approved | ParticipantStatus::Declined) => Some(status),
            _ => None,
        };
    }

    /// The reason box is shown only for declines.
    pub fn needs_reason(&self) -> bool {
        self.status == Some(ParticipantStatus::Declined)
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn button_label(&self) -> &'static str {
        if self.busy { BUSY_LABEL } else { SAVE_LABEL }
    }

    /// Check the input and build the PATCH body.
    ///
    /// # Errors
    ///
    /// Returns the message to toast when no status is picked or a decline
    /// has a blank reason.
    pub fn validate(&self) -> Result<StatusUpdateRequest, &'static str> {
        let status = self.status.as_ref().ok_or(STATUS_REQUIRED_MESSAGE)?;
        let reason = self.reason.trim();
        if *status == ParticipantStatus::Declined && reason.is_empty() {
            return Err(REASON_REQUIRED_MESSAGE);
        }
        let declined_reason = if *status == ParticipantStatus::Declined { reason.to_owned() } else { String::new() };
        Ok(StatusUpdateRequest { status: status.as_str().to_owned(), declined_reason })
    }

    /// Validate and mark the request in flight.
    ///
    /// # Errors
    ///
    /// Same as [`StatusAction::validate`]. A second call while busy returns
    /// `Ok(None)`.
    pub fn begin(&mut self) -> Result<Option<StatusUpdateRequest>, &'static str> {
        if self.busy {
            return Ok(None);
        }
        let request = self.validate()?;
        self.busy = true;
        Ok(Some(request))
    }

    pub fn apply_outcome(&mut self, outcome: ApiOutcome<Value>) -> StatusResult {
        self.busy = false;
        match outcome {
            ApiOutcome::Success(data) => {
                self.status = None;
                self.reason.clear();
                StatusResult::Updated(payload_text(&data))
            }
            ApiOutcome::Unauthorized => StatusResult::Unauthorized,
            other => StatusResult::Failed(other.message().unwrap_or_default().to_owned()),
        }
    }
}
