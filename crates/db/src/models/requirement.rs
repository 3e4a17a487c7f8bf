//! Requirement model: a leaf-level compliance item under a criteria.
//!
//! Requirements may nest under a parent requirement in the same criteria.
//! The parent is stored as a foreign key; the dot-qualified
//! `ParentRequirementCode` remains the wire contract and is resolved at the
//! service boundary.

use accredo_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::wire;

/// A requirement row, with the parent's code denormalized for the API.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Requirement {
    #[serde(rename = "RequirementID")]
    pub id: DbId,
    #[serde(rename = "RequirementCode")]
    pub requirement_code: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "CriteriaID")]
    pub criteria_id: DbId,
    #[serde(rename = "ParentRequirementID")]
    pub parent_requirement_id: Option<DbId>,
    #[serde(rename = "ParentRequirementCode")]
    pub parent_requirement_code: Option<String>,
    #[serde(rename = "CreatedAt")]
    pub created_at: Timestamp,
}

/// A requirement joined up the hierarchy: criteria, optional area, event.
///
/// Requirements whose criteria has no area still appear, with the area
/// fields null.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RequirementWithContext {
    #[serde(rename = "RequirementID")]
    pub id: DbId,
    #[serde(rename = "RequirementCode")]
    pub requirement_code: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "CriteriaID")]
    pub criteria_id: DbId,
    #[serde(rename = "ParentRequirementID")]
    pub parent_requirement_id: Option<DbId>,
    #[serde(rename = "ParentRequirementCode")]
    pub parent_requirement_code: Option<String>,
    #[serde(rename = "CriteriaCode")]
    pub criteria_code: String,
    #[serde(rename = "CriteriaName")]
    pub criteria_name: String,
    #[serde(rename = "AreaID")]
    pub area_id: Option<DbId>,
    #[serde(rename = "AreaCode")]
    pub area_code: Option<String>,
    #[serde(rename = "AreaName")]
    pub area_name: Option<String>,
    #[serde(rename = "EventID")]
    pub event_id: DbId,
    #[serde(rename = "EventCode")]
    pub event_code: String,
    #[serde(rename = "EventName")]
    pub event_name: String,
}

/// DTO for creating or updating a requirement. Add and update take the
/// same field set and run the same code derivation.
#[derive(Debug, Deserialize)]
pub struct RequirementInput {
    #[serde(rename = "RequirementCode", default, deserialize_with = "wire::opt_string")]
    pub requirement_code: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "CriteriaID", default, deserialize_with = "wire::opt_id")]
    pub criteria_id: Option<DbId>,
    #[serde(
        rename = "ParentRequirementCode",
        default,
        deserialize_with = "wire::opt_string"
    )]
    pub parent_requirement_code: Option<String>,
}
