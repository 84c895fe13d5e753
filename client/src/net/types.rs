//! Wire DTOs mirrored from the TIX REST API.
//!
//! DESIGN
//! ======
//! Fields follow the API's JSON names. Overview-only and profile-only fields
//! carry `#[serde(default)]` because the list and profile endpoints return
//! subsets of the same shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An event backed by a Google Form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub google_form_id: String,
    pub name: String,
    #[serde(default)]
    pub location: String,
    /// Epoch seconds.
    #[serde(default)]
    pub preregister_date: i64,
    /// Epoch seconds.
    #[serde(default)]
    pub event_date: i64,
    #[serde(default)]
    pub total_participants: i64,
    #[serde(default)]
    pub total_approved_participant: i64,
    #[serde(default)]
    pub total_waiting_approval_participant: i64,
    #[serde(default)]
    pub total_declined_participant: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weekly_overview: Vec<WeeklyOverview>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latest_respondents: Vec<Participant>,
    #[serde(default)]
    pub is_active: bool,
}

/// One bar of the weekly respondents histogram.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyOverview {
    pub name: String,
    pub total: i64,
}

/// A registration collected from the event's Google Form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    #[serde(default)]
    pub event_id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(rename = "prof_of_payment", default)]
    pub proof_of_payment: String,
    #[serde(default)]
    pub status: ParticipantStatus,
    #[serde(default)]
    pub approved_at: Option<i64>,
    #[serde(default)]
    pub declined_at: Option<i64>,
    #[serde(default)]
    pub declined_reason: String,
}

/// Server-authoritative participant status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ParticipantStatus {
    #[default]
    WaitingApproval,
    Approved,
    Declined,
    /// A status string this client does not know, kept verbatim.
    Other(String),
}

impl ParticipantStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "waiting approval" | "waiting" => Self::WaitingApproval,
            "approved" => Self::Approved,
            "declined" => Self::Declined,
            _ => Self::Other(raw.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::WaitingApproval => "waiting approval",
            Self::Approved => "approved",
            Self::Declined => "declined",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ParticipantStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ParticipantStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// An admin account. The profile endpoint returns only `uuid`, `email`,
/// and `username`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_verified: bool,
}

impl User {
    /// Two-letter avatar fallback.
    pub fn initials(&self) -> String {
        self.username.chars().take(2).collect()
    }
}

/// A question returned by Google Form validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleFormQuestion {
    pub id: String,
    pub title: String,
}

/// Export formats accepted by the export endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportType {
    Pdf,
    Xls,
}

impl ExportType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Xls => "xls",
        }
    }
}

// =============================================================
// Request payloads
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyRequest {
    pub jwt: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidateFormRequest {
    pub google_form_id: String,
}

/// Dates are epoch-second strings, as the API binds them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateEventRequest {
    pub google_form_id: String,
    pub name: String,
    pub preregister_date: String,
    pub event_date: String,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusUpdateRequest {
    pub status: String,
    pub declined_reason: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
