//! Magic-link login form state and the rate-limit cooldown.
//!
//! TRADE-OFFS
//! ==========
//! The cooldown is a local countdown started when the API answers `429`. It
//! is not synchronized with any server retry-after value, so the button can
//! re-enable slightly before the server accepts another request.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde_json::Value;

use crate::config::LOGIN_COOLDOWN_SECS;
use crate::net::outcome::ApiOutcome;

pub const PROMPT_MESSAGE: &str = "Enter your email address.";
pub const EMAIL_REQUIRED_MESSAGE: &str = "Email is required.";
pub const REQUEST_LABEL: &str = "Request Magic Link";
pub const RESEND_LABEL: &str = "Resend Magic Link";
pub const BUSY_LABEL: &str = "Please wait...";

/// Whole-second countdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cooldown {
    remaining: u32,
}

impl Cooldown {
    pub fn start(secs: u32) -> Self {
        Self { remaining: secs }
    }

    pub fn is_active(self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(self) -> u32 {
        self.remaining
    }

    /// Advance one second. Returns `true` on the tick that ends the countdown.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn label(self) -> String {
        format!("Please wait ({})", self.remaining)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginStage {
    #[default]
    EnterEmail,
    /// The link was emailed; the form is replaced by a notice.
    LinkSent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    stage: LoginStage,
    message: String,
    is_error: bool,
    busy: bool,
    button_label: String,
    cooldown: Cooldown,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            stage: LoginStage::EnterEmail,
            message: PROMPT_MESSAGE.to_owned(),
            is_error: false,
            busy: false,
            button_label: REQUEST_LABEL.to_owned(),
            cooldown: Cooldown::default(),
        }
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> LoginStage {
        self.stage
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn button_label(&self) -> &str {
        &self.button_label
    }

    pub fn cooldown(&self) -> Cooldown {
        self.cooldown
    }

    pub fn button_disabled(&self) -> bool {
        self.busy || self.cooldown.is_active()
    }

    /// Prompt reopened: back to the email step. A running cooldown survives.
    pub fn reopen(&mut self) {
        let email = std::mem::take(&mut self.email);
        let cooldown = self.cooldown;
        *self = Self { email, ..Self::default() };
        if cooldown.is_active() {
            self.cooldown = cooldown;
            self.button_label = cooldown.label();
        }
    }

    /// Validate input and mark the form busy. Returns the email to submit,
    /// or `None` when nothing should be sent.
    pub fn begin_request(&mut self) -> Option<String> {
        if self.button_disabled() {
            return None;
        }
        let email = self.email.trim().to_owned();
        if email.is_empty() {
            self.is_error = true;
            self.message = EMAIL_REQUIRED_MESSAGE.to_owned();
            return None;
        }
        self.busy = true;
        self.button_label = BUSY_LABEL.to_owned();
        Some(email)
    }

    pub fn apply_outcome(&mut self, outcome: ApiOutcome<Value>) {
        self.busy = false;
        match outcome {
            ApiOutcome::Success(_) => {
                self.stage = LoginStage::LinkSent;
                self.is_error = false;
                self.button_label = RESEND_LABEL.to_owned();
            }
            ApiOutcome::RateLimited(msg) => {
                self.is_error = true;
                self.message = msg;
                self.cooldown = Cooldown::start(LOGIN_COOLDOWN_SECS);
                self.button_label = self.cooldown.label();
            }
            other => {
                self.is_error = true;
                self.message = other.message().unwrap_or_default().to_owned();
                self.button_label = RESEND_LABEL.to_owned();
            }
        }
    }

    /// One second elapsed.
    pub fn tick(&mut self) {
        if !self.cooldown.is_active() {
            return;
        }
        if self.cooldown.tick() {
            self.button_label = RESEND_LABEL.to_owned();
        } else {
            self.button_label = self.cooldown.label();
        }
    }
}
