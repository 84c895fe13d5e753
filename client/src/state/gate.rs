//! Session gate: decides, on every navigation, whether to show the splash,
//! the login prompt, an events-list redirect, or the requested page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The default layout owns one `SessionGate` and feeds it mount, navigation,
//! and API results. Each transition returns the [`GateEffect`]s the layout
//! must perform (token exchange, redirect, profile fetch), which keeps the
//! gate itself free of browser and network calls.
//!
//! ERROR HANDLING
//! ==============
//! Only `401` is distinguished: it re-opens the login prompt. Every other
//! profile failure is ignored and retried on the next navigation.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::net::outcome::ApiOutcome;
use crate::net::types::User;
use crate::routes::is_events_route;
use crate::state::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    SplashVisible,
    AwaitingEventSelection,
    LoginRequired,
    Authenticated,
}

/// Token carried back by a magic link in the URL fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MagicLinkToken {
    pub access_token: String,
    /// `magiclink` for sign-in links, `invite` for invitation links.
    pub kind: String,
}

/// Parse `#access_token=…&type=…` from a URL fragment.
pub fn parse_magic_link(fragment: &str) -> Option<MagicLinkToken> {
    let mut access_token = None;
    let mut kind = None;
    for pair in fragment.trim_start_matches('#').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "access_token" if !value.is_empty() => access_token = Some(value.to_owned()),
            "type" if !value.is_empty() => kind = Some(value.to_owned()),
            _ => {}
        }
    }
    Some(MagicLinkToken {
        access_token: access_token?,
        kind: kind.unwrap_or_else(|| "magiclink".to_owned()),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateEffect {
    ExchangeToken(MagicLinkToken),
    RedirectToEvents,
    FetchProfile,
}

#[derive(Clone, Debug, Default)]
pub struct SessionGate {
    splash_done: bool,
    exchange_pending: bool,
    login_prompt: bool,
    unauthorized: bool,
    awaiting_event: bool,
    profile_requested: bool,
    profile: Option<User>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GatePhase {
        if self.splash_visible() {
            GatePhase::SplashVisible
        } else if self.login_prompt {
            GatePhase::LoginRequired
        } else if self.awaiting_event {
            GatePhase::AwaitingEventSelection
        } else {
            GatePhase::Authenticated
        }
    }

    /// The splash covers the minimum display time and any in-flight
    /// magic-link exchange.
    pub fn splash_visible(&self) -> bool {
        !self.splash_done || self.exchange_pending
    }

    pub fn login_prompt_visible(&self) -> bool {
        self.login_prompt
    }

    pub fn profile(&self) -> Option<&User> {
        self.profile.as_ref()
    }

    /// Minimum splash time elapsed; start a token exchange if the URL
    /// fragment carries a magic link.
    pub fn finish_splash(&mut self, fragment: Option<&str>) -> Vec<GateEffect> {
        self.splash_done = true;
        match fragment.and_then(parse_magic_link) {
            Some(token) => {
                self.exchange_pending = true;
                vec![GateEffect::ExchangeToken(token)]
            }
            None => Vec::new(),
        }
    }

    /// Re-evaluate the gate for a route change. Runs on every navigation.
    pub fn navigate(&mut self, path: &str, session: &Session) -> Vec<GateEffect> {
        let mut effects = Vec::new();

        self.awaiting_event = !session.has_event();
        if self.awaiting_event && !is_events_route(path) {
            effects.push(GateEffect::RedirectToEvents);
        }

        if !session.is_logged_in() {
            self.forget_account();
        }
        self.login_prompt = !session.is_logged_in() || self.unauthorized;

        if session.is_logged_in() && !self.unauthorized {
            effects.extend(self.request_profile());
        }
        effects
    }

    /// Result of the magic-link exchange. The caller has already persisted
    /// the login flag when `accepted` is true.
    pub fn token_exchanged(&mut self, accepted: bool) -> Vec<GateEffect> {
        self.exchange_pending = false;
        if accepted {
            // The link may belong to a different account.
            self.forget_account();
            self.login_prompt = false;
            self.request_profile().into_iter().collect()
        } else {
            self.login_prompt = true;
            Vec::new()
        }
    }

    pub fn profile_loaded(&mut self, outcome: ApiOutcome<User>) {
        match outcome {
            ApiOutcome::Success(user) => self.profile = Some(user),
            ApiOutcome::Unauthorized => {
                self.profile_requested = false;
                self.signal_unauthorized();
            }
            _ => self.profile_requested = false,
        }
    }

    /// A page or dialog saw a `401`.
    pub fn signal_unauthorized(&mut self) {
        self.unauthorized = true;
        self.login_prompt = true;
    }

    /// Drop the cached profile and any 401 signal from the previous login.
    fn forget_account(&mut self) {
        self.profile = None;
        self.profile_requested = false;
        self.unauthorized = false;
    }

    fn request_profile(&mut self) -> Option<GateEffect> {
        if self.profile.is_some() || self.profile_requested {
            return None;
        }
        self.profile_requested = true;
        Some(GateEffect::FetchProfile)
    }
}

/// Header and footer are hidden on the events list.
pub fn show_navigation(path: &str) -> bool {
    !is_events_route(path)
}
