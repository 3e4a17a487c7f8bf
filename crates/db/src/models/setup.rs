//! Setup wizard plan: one nested payload describing a whole framework.
//!
//! The legacy wizard issued four sequential requests (event, areas,
//! criteria, requirements) with no rollback on failure. The plan form lets
//! the backend create everything in a single transaction instead.

use accredo_core::types::DbId;
use serde::{Deserialize, Serialize};

/// Full framework plan: one event with its areas, criteria, requirements.
#[derive(Debug, Deserialize)]
pub struct FrameworkPlan {
    #[serde(rename = "Event")]
    pub event: EventPlan,
    #[serde(rename = "Areas", default)]
    pub areas: Vec<AreaPlan>,
}

#[derive(Debug, Deserialize)]
pub struct EventPlan {
    #[serde(rename = "EventCode")]
    pub event_code: Option<String>,
    #[serde(rename = "EventName")]
    pub event_name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AreaPlan {
    #[serde(rename = "AreaCode")]
    pub area_code: Option<String>,
    #[serde(rename = "AreaName")]
    pub area_name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "SortOrder")]
    pub sort_order: Option<i32>,
    #[serde(rename = "Criteria", default)]
    pub criteria: Vec<CriteriaPlan>,
}

#[derive(Debug, Deserialize)]
pub struct CriteriaPlan {
    #[serde(rename = "CriteriaCode")]
    pub criteria_code: Option<String>,
    #[serde(rename = "CriteriaName")]
    pub criteria_name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Requirements", default)]
    pub requirements: Vec<RequirementPlan>,
}

#[derive(Debug, Deserialize)]
pub struct RequirementPlan {
    #[serde(rename = "RequirementCode")]
    pub requirement_code: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

/// A plan with every field validated and every code fully derived,
/// ready to persist. Built by the setup handler; consumed by
/// `SetupRepo::create_framework` inside one transaction.
#[derive(Debug)]
pub struct ResolvedFramework {
    pub event_code: String,
    pub event_name: String,
    pub description: Option<String>,
    pub areas: Vec<ResolvedArea>,
}

#[derive(Debug)]
pub struct ResolvedArea {
    pub area_code: String,
    pub area_name: String,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub criteria: Vec<ResolvedCriteria>,
}

#[derive(Debug)]
pub struct ResolvedCriteria {
    pub criteria_code: String,
    pub criteria_name: String,
    pub description: String,
    pub requirements: Vec<ResolvedRequirement>,
}

#[derive(Debug)]
pub struct ResolvedRequirement {
    pub requirement_code: String,
    pub description: String,
}

/// IDs assigned while executing a framework plan.
#[derive(Debug, Serialize)]
pub struct FrameworkCreated {
    #[serde(rename = "EventID")]
    pub event_id: DbId,
    #[serde(rename = "AreaIDs")]
    pub area_ids: Vec<DbId>,
    #[serde(rename = "CriteriaIDs")]
    pub criteria_ids: Vec<DbId>,
    #[serde(rename = "RequirementIDs")]
    pub requirement_ids: Vec<DbId>,
}
