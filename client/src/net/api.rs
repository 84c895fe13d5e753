//! REST API calls against the TIX backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sent with
//! `credentials: include` so the session cookie travels with every request.
//! Server-side (SSR): stubs returning `NetworkFailure`, since these endpoints
//! are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Each action is described by an [`ApiRequest`] built by a pure function,
//! then executed by [`execute`]. Building and executing are split so request
//! shapes are testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::outcome::ApiOutcome;
#[cfg(not(feature = "hydrate"))]
use super::outcome::transport_failure;
use super::types::{
    CreateEventRequest, EmailRequest, Event, ExportType, GoogleFormQuestion, Participant, StatusUpdateRequest, User,
    ValidateFormRequest, VerifyRequest,
};
use crate::config::api_base_url;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// One API call: method, path relative to the API base, optional JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None }
    }

    fn with_body<B: Serialize>(mut self, body: &B) -> Self {
        self.body = serde_json::to_value(body).ok();
        self
    }

    pub fn url(&self) -> String {
        join_url(&api_base_url(), &self.path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

// =============================================================
// Request builders
// =============================================================

pub fn request_magic_link_request(email: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, "auth/validate").with_body(&EmailRequest { email: email.to_owned() })
}

pub fn verify_session_request(jwt: &str, kind: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, "auth/verify").with_body(&VerifyRequest { jwt: jwt.to_owned(), kind: kind.to_owned() })
}

pub fn profile_request() -> ApiRequest {
    ApiRequest::new(Method::Get, "auth/profile")
}

pub fn logout_request() -> ApiRequest {
    ApiRequest::new(Method::Post, "auth/logout")
}

pub fn list_users_request() -> ApiRequest {
    ApiRequest::new(Method::Get, "users")
}

pub fn invite_user_request(email: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, "users/invite").with_body(&EmailRequest { email: email.to_owned() })
}

pub fn remove_user_request(uuid: &str) -> ApiRequest {
    ApiRequest::new(Method::Delete, format!("users/remove/{uuid}"))
}

pub fn list_events_request() -> ApiRequest {
    ApiRequest::new(Method::Get, "events")
}

pub fn create_event_request(payload: &CreateEventRequest) -> ApiRequest {
    ApiRequest::new(Method::Post, "events").with_body(payload)
}

pub fn validate_form_request(google_form_id: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, "events/validate")
        .with_body(&ValidateFormRequest { google_form_id: google_form_id.to_owned() })
}

pub fn event_overview_request(event_id: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, format!("events/{event_id}/overview"))
}

pub fn event_participants_request(event_id: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, format!("events/{event_id}/participants"))
}

pub fn sync_participants_request(event_id: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, format!("events/{event_id}/sync"))
}

pub fn update_status_request(event_id: &str, participant_id: i64, payload: &StatusUpdateRequest) -> ApiRequest {
    ApiRequest::new(Method::Patch, format!("events/{event_id}/participants/{participant_id}/status")).with_body(payload)
}

pub fn generate_ticket_request(event_id: &str, participant_id: i64) -> ApiRequest {
    ApiRequest::new(Method::Post, format!("events/{event_id}/participants/{participant_id}/ticket"))
        .with_body(&serde_json::json!({}))
}

pub fn export_event_request(event_id: &str, export_type: ExportType) -> ApiRequest {
    ApiRequest::new(Method::Post, format!("events/{event_id}/export/{}", export_type.as_str()))
}

// =============================================================
// Execution
// =============================================================

/// Send `request` and interpret the response envelope.
pub async fn execute<T: DeserializeOwned>(request: ApiRequest) -> ApiOutcome<T> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        use super::outcome::{interpret, transport_failure};

        let url = request.url();
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        }
        .credentials(web_sys::RequestCredentials::Include)
        .header("Content-Type", "application/json");

        let built = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        };
        let built = match built {
            Ok(req) => req,
            Err(e) => return transport_failure(&e.to_string()),
        };

        let resp = match built.send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("{} {url} failed: {e}", request.method.as_str());
                return transport_failure(&e.to_string());
            }
        };
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let outcome = interpret(status, &body);
        if let Some(message) = outcome.message() {
            log::debug!("{} {url} -> {status}: {message}", request.method.as_str());
        }
        outcome
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        transport_failure("not available on server")
    }
}

// =============================================================
// Typed calls
// =============================================================

/// Ask the API to email a magic link. A `200` also covers an already valid
/// session cookie.
pub async fn request_magic_link(email: &str) -> ApiOutcome<Value> {
    execute(request_magic_link_request(email)).await
}

/// Exchange a magic-link token for a session cookie.
pub async fn verify_session(jwt: &str, kind: &str) -> ApiOutcome<Value> {
    execute(verify_session_request(jwt, kind)).await
}

pub async fn fetch_profile() -> ApiOutcome<User> {
    execute(profile_request()).await
}

/// The API answers a successful logout with `401`.
pub async fn logout() -> ApiOutcome<Value> {
    execute(logout_request()).await
}

pub async fn list_users() -> ApiOutcome<Option<Vec<User>>> {
    execute(list_users_request()).await
}

pub async fn invite_user(email: &str) -> ApiOutcome<Value> {
    execute(invite_user_request(email)).await
}

pub async fn remove_user(uuid: &str) -> ApiOutcome<Value> {
    execute(remove_user_request(uuid)).await
}

pub async fn list_events() -> ApiOutcome<Option<Vec<Event>>> {
    execute(list_events_request()).await
}

pub async fn create_event(payload: &CreateEventRequest) -> ApiOutcome<Value> {
    execute(create_event_request(payload)).await
}

pub async fn validate_google_form(google_form_id: &str) -> ApiOutcome<Option<Vec<GoogleFormQuestion>>> {
    execute(validate_form_request(google_form_id)).await
}

pub async fn fetch_event_overview(event_id: &str) -> ApiOutcome<Option<Event>> {
    execute(event_overview_request(event_id)).await
}

pub async fn fetch_event_participants(event_id: &str) -> ApiOutcome<Option<Vec<Participant>>> {
    execute(event_participants_request(event_id)).await
}

pub async fn sync_participants(event_id: &str) -> ApiOutcome<Value> {
    execute(sync_participants_request(event_id)).await
}

pub async fn update_participant_status(
    event_id: &str,
    participant_id: i64,
    payload: &StatusUpdateRequest,
) -> ApiOutcome<Value> {
    execute(update_status_request(event_id, participant_id, payload)).await
}

pub async fn generate_ticket(event_id: &str, participant_id: i64) -> ApiOutcome<Value> {
    execute(generate_ticket_request(event_id, participant_id)).await
}

pub async fn export_event(event_id: &str, export_type: ExportType) -> ApiOutcome<Value> {
    execute(export_event_request(event_id, export_type)).await
}

/// Render a success payload for a toast; the API usually sends a sentence.
pub fn payload_text(data: &Value) -> String {
    match data {
        Value::String(text) => text.trim().to_owned(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
