//! Route paths for the admin app.
//!
//! Every route lives under `/admin`, matching where the host mounts the app.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const BASE_PATH: &str = "/admin";

pub fn events_path() -> String {
    BASE_PATH.to_owned()
}

pub fn overview_path(event_id: &str) -> String {
    format!("{BASE_PATH}/event/overview/{event_id}")
}

pub fn participants_path(event_id: &str) -> String {
    format!("{BASE_PATH}/event/participants/{event_id}")
}

pub fn users_path() -> String {
    format!("{BASE_PATH}/users")
}

/// Whether `path` is the events list, the only route usable without a
/// selected event.
pub fn is_events_route(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    trimmed.is_empty() || trimmed == BASE_PATH
}

/// Main-nav sections, used to highlight the active tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Overview,
    Participants,
    Users,
}

pub fn active_section(path: &str) -> Option<Section> {
    if path.contains("/overview") {
        Some(Section::Overview)
    } else if path.contains("/participants") {
        Some(Section::Participants)
    } else if path.contains("/users") {
        Some(Section::Users)
    } else {
        None
    }
}

/// Prefilled Google Form URL for the event switcher's "Google Form" entry.
pub fn google_form_url(form_id: &str) -> String {
    format!("https://docs.google.com/forms/d/{form_id}/prefill")
}
