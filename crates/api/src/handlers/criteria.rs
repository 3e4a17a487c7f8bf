//! Handlers for the `/criteria` resource.
//!
//! Criteria codes are user-supplied, never auto-generated. When a parent
//! criteria is given and the code has no dot, the stored code is qualified
//! with the parent's code, so the persisted value matches what the legacy
//! UI previewed.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::PgPool;

use accredo_core::coding::qualify_child_code;
use accredo_core::error::CoreError;
use accredo_core::types::DbId;
use accredo_db::models::criteria::CriteriaInput;
use accredo_db::repositories::{AreaRepo, CriteriaRepo, EventRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{parse_id_list, require_field, require_id};
use crate::response::{DeleteResponse, Envelope};
use crate::state::AppState;

/// A [`CriteriaInput`] with references checked and the code qualified.
struct ResolvedCriteria {
    event_id: DbId,
    area_id: Option<DbId>,
    parent_criteria_id: Option<DbId>,
    criteria_code: String,
    criteria_name: String,
    description: String,
}

/// Validate required fields and referenced rows, and qualify the code
/// against the parent. Shared by the add and update flows.
async fn resolve_input(pool: &PgPool, input: &CriteriaInput) -> AppResult<ResolvedCriteria> {
    let event_id = require_id(input.event_id, "EventID")?;
    let raw_code = require_field(input.criteria_code.as_deref(), "CriteriaCode")?;
    let criteria_name = require_field(input.criteria_name.as_deref(), "CriteriaName")?;
    let description = require_field(input.description.as_deref(), "Description")?;

    EventRepo::find_by_id(pool, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    if let Some(area_id) = input.area_id {
        let area = AreaRepo::find_by_id(pool, area_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("Area not found: {area_id}")))?;
        if area.event_id != event_id {
            return Err(AppError::BadRequest(format!(
                "Area {area_id} belongs to a different event"
            )));
        }
    }

    let mut criteria_code = raw_code.to_string();
    if let Some(parent_id) = input.parent_criteria_id {
        let parent = CriteriaRepo::find_by_id(pool, parent_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Parent criteria not found: {parent_id}"))
            })?;
        if parent.event_id != event_id {
            return Err(AppError::BadRequest(format!(
                "Parent criteria {parent_id} belongs to a different event"
            )));
        }
        criteria_code = qualify_child_code(&parent.criteria_code, raw_code);
    }

    Ok(ResolvedCriteria {
        event_id,
        area_id: input.area_id,
        parent_criteria_id: input.parent_criteria_id,
        criteria_code,
        criteria_name: criteria_name.to_string(),
        description: description.to_string(),
    })
}

/// GET /criteria/event/{event_id}
pub async fn list_by_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let criteria = CriteriaRepo::list_by_event(&state.pool, event_id).await?;
    Ok(Json(Envelope::data(criteria)))
}

/// GET /criteria/area/{area_id}
pub async fn list_by_area(
    State(state): State<AppState>,
    Path(area_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let criteria = CriteriaRepo::list_by_area(&state.pool, area_id).await?;
    Ok(Json(Envelope::data(criteria)))
}

/// POST /criteria/add
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CriteriaInput>,
) -> AppResult<impl IntoResponse> {
    let resolved = resolve_input(&state.pool, &input).await?;

    let criteria = CriteriaRepo::create(
        &state.pool,
        resolved.event_id,
        resolved.area_id,
        resolved.parent_criteria_id,
        &resolved.criteria_code,
        &resolved.criteria_name,
        &resolved.description,
    )
    .await?;

    tracing::info!(
        criteria_id = criteria.id,
        criteria_code = %criteria.criteria_code,
        event_id = criteria.event_id,
        "Criteria created"
    );

    Ok((StatusCode::CREATED, Json(Envelope::data(criteria))))
}

/// PUT /criteria/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CriteriaInput>,
) -> AppResult<impl IntoResponse> {
    let resolved = resolve_input(&state.pool, &input).await?;

    // Reject parent assignments that would close a loop in the tree.
    if let Some(parent_id) = resolved.parent_criteria_id {
        if CriteriaRepo::is_ancestor(&state.pool, id, parent_id).await? {
            return Err(AppError::Core(CoreError::CycleDetected {
                entity: "Criteria",
                id,
            }));
        }
    }

    let criteria = CriteriaRepo::update(
        &state.pool,
        id,
        resolved.event_id,
        resolved.area_id,
        resolved.parent_criteria_id,
        &resolved.criteria_code,
        &resolved.criteria_name,
        &resolved.description,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Criteria",
        id,
    }))?;

    tracing::info!(criteria_id = id, criteria_code = %criteria.criteria_code, "Criteria updated");

    Ok(Json(Envelope::data(criteria)))
}

/// DELETE /criteria/delete
///
/// Bulk delete: body `{criteriaIds: [..]}`.
pub async fn delete_bulk(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let ids = parse_id_list(&body, "criteriaIds")?;
    let deleted = CriteriaRepo::delete_by_ids(&state.pool, &ids).await?;
    if deleted == 0 {
        return Err(AppError::NotFound(
            "No criteria found for the given IDs".to_string(),
        ));
    }

    tracing::info!(count = deleted, "Criteria deleted");

    Ok(Json(DeleteResponse::new(deleted)))
}
