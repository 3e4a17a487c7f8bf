//! Office head model: the person accountable for an office's compliance.

use accredo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::wire;

/// A row from the `office_heads` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OfficeHead {
    #[serde(rename = "HeadID")]
    pub id: DbId,
    #[serde(rename = "OfficeID")]
    pub office_id: DbId,
    #[serde(rename = "HeadName")]
    pub head_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Position")]
    pub position: Option<String>,
    #[serde(rename = "CreatedAt")]
    pub created_at: Timestamp,
}

/// DTO for creating an office head.
#[derive(Debug, Deserialize)]
pub struct CreateOfficeHead {
    #[serde(rename = "OfficeID", default, deserialize_with = "wire::opt_id")]
    pub office_id: Option<DbId>,
    #[serde(rename = "HeadName")]
    pub head_name: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Position")]
    pub position: Option<String>,
}

/// DTO for updating an office head. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateOfficeHead {
    #[serde(rename = "OfficeID", default, deserialize_with = "wire::opt_id")]
    pub office_id: Option<DbId>,
    #[serde(rename = "HeadName")]
    pub head_name: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Position")]
    pub position: Option<String>,
}
