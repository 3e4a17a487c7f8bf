//! Area model: a named, display-ordered subdivision of an event.

use accredo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::wire;

/// A row from the `areas` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Area {
    #[serde(rename = "AreaID")]
    pub id: DbId,
    #[serde(rename = "EventID")]
    pub event_id: DbId,
    #[serde(rename = "AreaCode")]
    pub area_code: String,
    #[serde(rename = "AreaName")]
    pub area_name: String,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "SortOrder")]
    pub sort_order: i32,
    #[serde(rename = "IsActive")]
    pub is_active: bool,
    #[serde(rename = "CreatedAt")]
    pub created_at: Timestamp,
}

/// DTO for creating an area.
///
/// The owning event arrives as `EventChildID` (the legacy frontend's field
/// name); `EventID` is accepted as an alias.
#[derive(Debug, Deserialize)]
pub struct CreateArea {
    #[serde(
        rename = "EventChildID",
        alias = "EventID",
        default,
        deserialize_with = "wire::opt_id"
    )]
    pub event_id: Option<DbId>,
    #[serde(rename = "AreaCode")]
    pub area_code: Option<String>,
    #[serde(rename = "AreaName")]
    pub area_name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "SortOrder")]
    pub sort_order: Option<i32>,
}
