//! Event-scoped actions on the participants page: sync, export, and
//! per-row participant actions.
//!
//! ERROR HANDLING
//! ==============
//! Every action reports through one toast. A `401` additionally sends the
//! admin back to the events list, where the session gate re-opens the login
//! prompt.

#[cfg(test)]
#[path = "event_action_test.rs"]
mod event_action_test;

use serde_json::Value;

use crate::net::api::payload_text;
use crate::net::outcome::{ApiOutcome, UNAUTHORIZED_MESSAGE};
use crate::net::types::ParticipantStatus;
use crate::state::session::Session;
use crate::state::toast::ToastKind;

pub const SELECT_EVENT_MESSAGE: &str = "Please select an event to do this action.";
pub const SYNC_LABEL: &str = "Sync participant data";
pub const BUSY_LABEL: &str = "Please wait . . .";

/// Event id for an action, or the toast to show when none is selected.
///
/// # Errors
///
/// Returns [`SELECT_EVENT_MESSAGE`] when the selection is unset or cleared.
pub fn action_event_id(session: &Session) -> Result<String, &'static str> {
    session.selected_event().map(|e| e.id.clone()).ok_or(SELECT_EVENT_MESSAGE)
}

/// Toast content plus whether to leave for the events list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionReport {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
    pub leave_to_events: bool,
}

pub fn report(title: &str, outcome: ApiOutcome<Value>) -> ActionReport {
    match outcome {
        ApiOutcome::Success(data) => ActionReport {
            kind: ToastKind::Info,
            title: title.to_owned(),
            description: payload_text(&data),
            leave_to_events: false,
        },
        ApiOutcome::Unauthorized => ActionReport {
            kind: ToastKind::Error,
            title: "Unauthenticated".to_owned(),
            description: UNAUTHORIZED_MESSAGE.to_owned(),
            leave_to_events: true,
        },
        other => ActionReport {
            kind: ToastKind::Error,
            title: title.to_owned(),
            description: other.message().unwrap_or_default().to_owned(),
            leave_to_events: false,
        },
    }
}

/// The single row action offered for a participant's status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    ResendTicket,
    UpdateStatus,
}

pub fn row_action(status: &ParticipantStatus) -> Option<RowAction> {
    match status {
        ParticipantStatus::Approved => Some(RowAction::ResendTicket),
        ParticipantStatus::WaitingApproval => Some(RowAction::UpdateStatus),
        ParticipantStatus::Declined | ParticipantStatus::Other(_) => None,
    }
}

/// Success text for a resent ticket, naming the recipient.
pub fn ticket_sent_message(server_message: &str, email: &str) -> String {
    let lead = server_message.trim();
    if lead.is_empty() {
        format!("We will send the ticket to {email} and to your email.")
    } else {
        format!("{lead} We will send the ticket to {email} and to your email.")
    }
}
