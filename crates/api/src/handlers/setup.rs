//! Handler for the setup wizard.
//!
//! Accepts one nested framework plan (event, areas, criteria,
//! requirements), validates and derives every code up front, then persists
//! the whole plan in a single transaction. The legacy wizard issued the
//! same writes as four separate requests with no rollback; a failing step
//! here leaves nothing behind.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use accredo_core::coding::{derive_requirement_code, next_child_code};
use accredo_db::models::setup::{
    FrameworkPlan, ResolvedArea, ResolvedCriteria, ResolvedFramework, ResolvedRequirement,
};
use accredo_db::repositories::SetupRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_field;
use crate::response::Envelope;
use crate::state::AppState;

/// Validate the plan and derive every requirement code.
///
/// Requirement codes inside a plan are derived against the criteria being
/// built: an explicit code follows the usual qualification rules; an empty
/// one is auto-numbered against the codes the plan has produced so far in
/// the same criteria.
fn resolve_plan(plan: &FrameworkPlan) -> Result<ResolvedFramework, AppError> {
    let event_code = require_field(plan.event.event_code.as_deref(), "EventCode")?;
    let event_name = require_field(plan.event.event_name.as_deref(), "EventName")?;

    let mut areas = Vec::with_capacity(plan.areas.len());
    for area in &plan.areas {
        let area_code = require_field(area.area_code.as_deref(), "AreaCode")?;
        let area_name = require_field(area.area_name.as_deref(), "AreaName")?;

        let mut criteria = Vec::with_capacity(area.criteria.len());
        for criteria_plan in &area.criteria {
            let criteria_code = require_field(criteria_plan.criteria_code.as_deref(), "CriteriaCode")?;
            let criteria_name = require_field(criteria_plan.criteria_name.as_deref(), "CriteriaName")?;
            let description = require_field(criteria_plan.description.as_deref(), "Description")?;

            let mut sibling_codes: Vec<String> = Vec::new();
            let mut requirements = Vec::with_capacity(criteria_plan.requirements.len());
            for requirement in &criteria_plan.requirements {
                let req_description =
                    require_field(requirement.description.as_deref(), "Description")?;
                let raw = requirement.requirement_code.as_deref().unwrap_or("").trim();

                let code = if raw.is_empty() {
                    next_child_code(criteria_code, &sibling_codes)
                } else {
                    derive_requirement_code(raw, None, Some(criteria_code), &[])
                        .map_err(|err| AppError::BadRequest(err.to_string()))?
                };
                sibling_codes.push(code.clone());

                requirements.push(ResolvedRequirement {
                    requirement_code: code,
                    description: req_description.to_string(),
                });
            }

            criteria.push(ResolvedCriteria {
                criteria_code: criteria_code.to_string(),
                criteria_name: criteria_name.to_string(),
                description: description.to_string(),
                requirements,
            });
        }

        areas.push(ResolvedArea {
            area_code: area_code.to_string(),
            area_name: area_name.to_string(),
            description: area.description.clone(),
            sort_order: area.sort_order,
            criteria,
        });
    }

    Ok(ResolvedFramework {
        event_code: event_code.to_string(),
        event_name: event_name.to_string(),
        description: plan.event.description.clone(),
        areas,
    })
}

/// POST /setup/framework
pub async fn create_framework(
    State(state): State<AppState>,
    Json(plan): Json<FrameworkPlan>,
) -> AppResult<impl IntoResponse> {
    let resolved = resolve_plan(&plan)?;

    let created = SetupRepo::create_framework(&state.pool, &resolved).await?;

    tracing::info!(
        event_id = created.event_id,
        areas = created.area_ids.len(),
        criteria = created.criteria_ids.len(),
        requirements = created.requirement_ids.len(),
        "Framework created"
    );

    Ok((StatusCode::CREATED, Json(Envelope::data(created))))
}
