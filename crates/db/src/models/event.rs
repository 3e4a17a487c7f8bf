//! Event model: the root of a compliance framework (one accreditation cycle).

use accredo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Event {
    #[serde(rename = "EventID")]
    pub id: DbId,
    #[serde(rename = "EventCode")]
    pub event_code: String,
    #[serde(rename = "EventName")]
    pub event_name: String,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "CreatedAt")]
    pub created_at: Timestamp,
}

/// DTO for creating an event. Fields are optional so missing values are
/// reported as 400 validation failures rather than body-decode errors.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    #[serde(rename = "EventCode")]
    pub event_code: Option<String>,
    #[serde(rename = "EventName")]
    pub event_name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

/// DTO for updating an event. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateEvent {
    #[serde(rename = "EventCode")]
    pub event_code: Option<String>,
    #[serde(rename = "EventName")]
    pub event_name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}
