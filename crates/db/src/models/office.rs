//! Office model: an organizational unit tracked for compliance.

use accredo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `offices` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Office {
    #[serde(rename = "OfficeID")]
    pub id: DbId,
    #[serde(rename = "OfficeName")]
    pub office_name: String,
    #[serde(rename = "OfficeType")]
    pub office_type: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "CreatedAt")]
    pub created_at: Timestamp,
}

/// DTO for creating an office.
#[derive(Debug, Deserialize)]
pub struct CreateOffice {
    #[serde(rename = "OfficeName")]
    pub office_name: Option<String>,
    #[serde(rename = "OfficeType")]
    pub office_type: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

/// DTO for updating an office. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateOffice {
    #[serde(rename = "OfficeName")]
    pub office_name: Option<String>,
    #[serde(rename = "OfficeType")]
    pub office_type: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}
