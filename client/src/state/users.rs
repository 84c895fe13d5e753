//! Admin-user list helpers: email search and the invite form.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use serde_json::Value;

use crate::net::outcome::ApiOutcome;
use crate::net::types::User;

pub const INVITE_EMAIL_REQUIRED_MESSAGE: &str = "Email is required.";
pub const USER_DELETED_MESSAGE: &str = "Account has been deleted successfully.";

/// Rows whose email contains `query`, case-insensitively. A blank query
/// keeps every row.
pub fn filter_by_email<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let needle = query.trim().to_lowercase();
    users
        .iter()
        .filter(|u| needle.is_empty() || u.email.to_lowercase().contains(&needle))
        .collect()
}

pub fn invitation_sent_message(email: &str) -> String {
    format!("We've sent an invitation to {email}.")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InviteResult {
    /// Toast, close the dialog, refresh the list.
    Sent(String),
    Unauthorized,
    /// Shown inline; the dialog stays open.
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InviteForm {
    pub email: String,
    error: Option<String>,
    busy: bool,
}

impl InviteForm {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn begin(&mut self) -> Option<String> {
        if self.busy {
            return None;
        }
        let email = self.email.trim().to_owned();
        if email.is_empty() {
            self.error = Some(INVITE_EMAIL_REQUIRED_MESSAGE.to_owned());
            return None;
        }
        self.error = None;
        self.busy = true;
        Some(email)
    }

    pub fn apply_outcome(&mut self, outcome: ApiOutcome<Value>) -> InviteResult {
        self.busy = false;
        match outcome {
            ApiOutcome::Success(_) => {
                let message = invitation_sent_message(self.email.trim());
                *self = Self::default();
                InviteResult::Sent(message)
            }
            ApiOutcome::Unauthorized => InviteResult::Unauthorized,
            other => {
                let message = other.message().unwrap_or_default().to_owned();
                self.error = Some(message.clone());
                InviteResult::Failed(message)
            }
        }
    }
}
