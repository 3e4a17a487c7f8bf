//! Criteria model: a node in the tree of evaluation standards.
//!
//! A criteria is scoped to an event, optionally assigned to an area, and
//! optionally nested under a parent criteria. The parent link is a nullable
//! self-referencing foreign key.

use accredo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::wire;

/// A row from the `criteria` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Criteria {
    #[serde(rename = "CriteriaID")]
    pub id: DbId,
    #[serde(rename = "EventID")]
    pub event_id: DbId,
    #[serde(rename = "AreaID")]
    pub area_id: Option<DbId>,
    #[serde(rename = "ParentCriteriaID")]
    pub parent_criteria_id: Option<DbId>,
    #[serde(rename = "CriteriaCode")]
    pub criteria_code: String,
    #[serde(rename = "CriteriaName")]
    pub criteria_name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "IsActive")]
    pub is_active: bool,
    #[serde(rename = "CreatedAt")]
    pub created_at: Timestamp,
}

/// A criteria row joined with its owning event's name and code.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CriteriaWithEvent {
    #[serde(rename = "CriteriaID")]
    pub id: DbId,
    #[serde(rename = "EventID")]
    pub event_id: DbId,
    #[serde(rename = "AreaID")]
    pub area_id: Option<DbId>,
    #[serde(rename = "ParentCriteriaID")]
    pub parent_criteria_id: Option<DbId>,
    #[serde(rename = "CriteriaCode")]
    pub criteria_code: String,
    #[serde(rename = "CriteriaName")]
    pub criteria_name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "IsActive")]
    pub is_active: bool,
    #[serde(rename = "CreatedAt")]
    pub created_at: Timestamp,
    #[serde(rename = "EventName")]
    pub event_name: String,
    #[serde(rename = "EventCode")]
    pub event_code: String,
}

/// DTO for creating or updating a criteria. The legacy update endpoint
/// resubmits the full field set, so create and update share one shape.
///
/// `AreaID` and `ParentCriteriaID` normalize `""`, `"null"`, and null to
/// no value.
#[derive(Debug, Deserialize)]
pub struct CriteriaInput {
    #[serde(rename = "EventID", default, deserialize_with = "wire::opt_id")]
    pub event_id: Option<DbId>,
    #[serde(rename = "AreaID", default, deserialize_with = "wire::opt_id")]
    pub area_id: Option<DbId>,
    #[serde(rename = "ParentCriteriaID", default, deserialize_with = "wire::opt_id")]
    pub parent_criteria_id: Option<DbId>,
    #[serde(rename = "CriteriaCode")]
    pub criteria_code: Option<String>,
    #[serde(rename = "CriteriaName")]
    pub criteria_name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}
