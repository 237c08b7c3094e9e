//! Core data types passed into a dispatch call.
//!
//! All of these are owned by the caller (the request-handling layer keeps
//! them in its own store); the engine reads them for the duration of one
//! dispatch call and holds no reference afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Why a recipient is being notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientRole {
    Donor,
    Admin,
    Requester,
}

/// One notification target.
///
/// Eligibility filtering (donor cooldown, active status) is the caller's
/// job; the engine notifies everyone it is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub id: Uuid,
    pub display_name: String,
    /// Raw contact number as stored upstream; canonicalized at send time.
    pub phone: String,
    pub role: RecipientRole,
    /// Donor blood type code (e.g. `O_NEGATIVE`), where applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Lifecycle event that triggered the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestEvent {
    NewRequest,
    Approved,
}

/// The blood request being notified about. Read-only to the engine.
///
/// `blood_type` and `urgency` carry the upstream storage codes
/// (e.g. `O_POSITIVE`, `HIGH`); display labels are resolved at
/// composition time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodRequest {
    pub full_name: String,
    /// Free-form; only a case-insensitive match on "male" is interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub phone: String,
    pub hospital: String,
    pub location: String,
    pub blood_type: String,
    pub urgency: String,
    pub age: u32,
    pub created_at: DateTime<Utc>,
    pub event: RequestEvent,
}

/// Which message template a dispatch call sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Alert eligible donors about an approved request
    DonorAlert,
    /// Ask admins to review a newly submitted request
    AdminAlert,
    /// Confirm approval to the person who filed the request
    RequesterConfirmation,
}
