//! Response interpretation for the TIX `{code, data}` envelope.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API signals failures both through the HTTP status (401 and 204 often
//! arrive with an empty body) and through the envelope `code`. Every caller
//! goes through [`interpret`] so the two checks collapse into one
//! [`ApiOutcome`].
//!
//! ERROR HANDLING
//! ==============
//! Parse and decode failures land in `NetworkFailure` together with transport
//! errors; the UI treats them identically (full-page error with retry).

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Typed result of one API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    Success(T),
    Unauthorized,
    /// 400, 406, or 422.
    ValidationError(String),
    /// 429.
    RateLimited(String),
    /// 500 and any code this client does not recognize.
    ServerFault(String),
    /// Transport error, unparseable body, or undecodable payload.
    NetworkFailure(String),
}

impl<T> ApiOutcome<T> {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// User-facing message for non-success outcomes.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Unauthorized => Some(UNAUTHORIZED_MESSAGE),
            Self::ValidationError(msg) | Self::RateLimited(msg) | Self::ServerFault(msg) | Self::NetworkFailure(msg) => {
                Some(msg.as_str())
            }
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            Self::Success(data) => ApiOutcome::Success(f(data)),
            Self::Unauthorized => ApiOutcome::Unauthorized,
            Self::ValidationError(msg) => ApiOutcome::ValidationError(msg),
            Self::RateLimited(msg) => ApiOutcome::RateLimited(msg),
            Self::ServerFault(msg) => ApiOutcome::ServerFault(msg),
            Self::NetworkFailure(msg) => ApiOutcome::NetworkFailure(msg),
        }
    }
}

pub const UNAUTHORIZED_MESSAGE: &str = "Please login to continue.";

#[derive(Debug, Deserialize)]
struct Envelope {
    code: u16,
    #[serde(default)]
    data: Value,
}

/// Collapse transport status and envelope into one outcome.
pub fn interpret<T: DeserializeOwned>(status: u16, body: &str) -> ApiOutcome<T> {
    if status == 401 {
        return ApiOutcome::Unauthorized;
    }

    let body = body.trim();
    if body.is_empty() {
        return classify(status, Value::Null);
    }

    match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) => classify(envelope.code, envelope.data),
        Err(e) => ApiOutcome::NetworkFailure(malformed_response_message(status, &e.to_string())),
    }
}

/// Outcome for a request that never produced a response.
pub fn transport_failure<T>(error: &str) -> ApiOutcome<T> {
    ApiOutcome::NetworkFailure(format!("request failed: {error}"))
}

fn classify<T: DeserializeOwned>(code: u16, data: Value) -> ApiOutcome<T> {
    match code {
        200..=299 => match serde_json::from_value::<T>(data) {
            Ok(decoded) => ApiOutcome::Success(decoded),
            Err(e) => ApiOutcome::NetworkFailure(malformed_response_message(code, &e.to_string())),
        },
        401 => ApiOutcome::Unauthorized,
        400 | 406 | 422 => ApiOutcome::ValidationError(data_message(&data, code)),
        429 => ApiOutcome::RateLimited(data_message(&data, code)),
        _ => ApiOutcome::ServerFault(data_message(&data, code)),
    }
}

fn data_message(data: &Value, code: u16) -> String {
    match data {
        Value::String(text) if !text.trim().is_empty() => text.trim().to_owned(),
        Value::Null | Value::String(_) => fallback_message(code),
        other => other.to_string(),
    }
}

fn fallback_message(code: u16) -> String {
    match code {
        429 => "Too many requests, try again later.".to_owned(),
        400 | 406 | 422 => format!("request rejected: {code}"),
        _ => format!("server error: {code}"),
    }
}

fn malformed_response_message(status: u16, detail: &str) -> String {
    format!("malformed response ({status}): {detail}")
}
