//! Handlers for the `/requirements` resource.
//!
//! The stored code is derived here: parent-scoped auto-numbering, bare
//! suffix qualification, or verbatim dotted codes, with the same decision
//! table on add and update. Auto-numbered inserts retry when a concurrent
//! writer claims the same code first.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use sqlx::PgPool;

use accredo_core::coding::derive_requirement_code;
use accredo_core::error::CoreError;
use accredo_core::types::DbId;
use accredo_db::models::criteria::Criteria;
use accredo_db::models::requirement::RequirementInput;
use accredo_db::models::wire;
use accredo_db::repositories::{CriteriaRepo, RequirementRepo};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::handlers::{parse_id_list, require_field, require_id};
use crate::response::{DeleteResponse, Envelope};
use crate::state::AppState;

/// Attempts for inserting an auto-numbered code before giving up. Two
/// writers racing under the same parent both compute the same next suffix;
/// the loser re-derives against the winner's committed row.
const MAX_CODE_RETRIES: u32 = 3;

/// Query parameters for the unscoped listing.
#[derive(Debug, serde::Deserialize)]
pub struct ListAllParams {
    #[serde(rename = "eventId", default, deserialize_with = "wire::opt_id")]
    pub event_id: Option<DbId>,
}

/// Outcome of code derivation for one write attempt.
struct ResolvedCode {
    code: String,
    parent_id: Option<DbId>,
    /// True when the code was auto-numbered (retry on unique conflict).
    auto_numbered: bool,
}

/// Resolve the parent reference and derive the code to store.
///
/// `node_id` is the requirement being updated, if any; it anchors the
/// cycle check so a node cannot become its own ancestor.
async fn resolve_code(
    pool: &PgPool,
    criteria: &Criteria,
    input: &RequirementInput,
    node_id: Option<DbId>,
) -> AppResult<ResolvedCode> {
    let raw = input.requirement_code.as_deref().unwrap_or("");

    if let Some(parent_code) = input.parent_requirement_code.as_deref() {
        let parent = RequirementRepo::find_by_code(pool, criteria.id, parent_code)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Parent requirement not found: {parent_code}"))
            })?;

        if let Some(id) = node_id {
            if RequirementRepo::is_ancestor(pool, id, parent.id).await? {
                return Err(AppError::Core(CoreError::CycleDetected {
                    entity: "Requirement",
                    id,
                }));
            }
        }

        let siblings = RequirementRepo::list_codes_by_parent(pool, parent.id).await?;
        let code = derive_requirement_code(raw, Some(&parent.requirement_code), None, &siblings)
            .map_err(|err| AppError::BadRequest(err.to_string()))?;

        return Ok(ResolvedCode {
            code,
            parent_id: Some(parent.id),
            auto_numbered: raw.is_empty(),
        });
    }

    let code = derive_requirement_code(raw, None, Some(&criteria.criteria_code), &[])
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    Ok(ResolvedCode {
        code,
        parent_id: None,
        auto_numbered: false,
    })
}

/// GET /requirements/all?eventId=
pub async fn list_all(
    State(state): State<AppState>,
    Query(params): Query<ListAllParams>,
) -> AppResult<impl IntoResponse> {
    let requirements = RequirementRepo::list_all(&state.pool, params.event_id).await?;
    Ok(Json(Envelope::data(requirements)))
}

/// GET /requirements/event/{event_id}
pub async fn list_by_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let requirements = RequirementRepo::list_by_event(&state.pool, event_id).await?;
    Ok(Json(Envelope::data(requirements)))
}

/// POST /requirements/add
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<RequirementInput>,
) -> AppResult<impl IntoResponse> {
    let description = require_field(input.description.as_deref(), "Description")?.to_string();
    let criteria_id = require_id(input.criteria_id, "CriteriaID")?;

    let criteria = CriteriaRepo::find_by_id(&state.pool, criteria_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Criteria",
            id: criteria_id,
        }))?;

    for attempt in 1..=MAX_CODE_RETRIES {
        let resolved = resolve_code(&state.pool, &criteria, &input, None).await?;

        match RequirementRepo::create(
            &state.pool,
            criteria.id,
            &resolved.code,
            &description,
            resolved.parent_id,
        )
        .await
        {
            Ok(requirement) => {
                tracing::info!(
                    requirement_id = requirement.id,
                    requirement_code = %requirement.requirement_code,
                    criteria_id = criteria.id,
                    "Requirement created"
                );
                return Ok((StatusCode::CREATED, Json(Envelope::data(requirement))));
            }
            Err(err) if resolved.auto_numbered
                && is_unique_violation(&err)
                && attempt < MAX_CODE_RETRIES =>
            {
                tracing::warn!(
                    attempt,
                    code = %resolved.code,
                    "Derived requirement code collided, re-deriving"
                );
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(AppError::InternalError(
        "Could not derive a unique requirement code".to_string(),
    ))
}

/// PUT /requirements/update/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RequirementInput>,
) -> AppResult<impl IntoResponse> {
    RequirementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Requirement",
            id,
        }))?;

    let description = require_field(input.description.as_deref(), "Description")?.to_string();
    let criteria_id = require_id(input.criteria_id, "CriteriaID")?;

    let criteria = CriteriaRepo::find_by_id(&state.pool, criteria_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Criteria",
            id: criteria_id,
        }))?;

    for attempt in 1..=MAX_CODE_RETRIES {
        let resolved = resolve_code(&state.pool, &criteria, &input, Some(id)).await?;

        match RequirementRepo::update(
            &state.pool,
            id,
            criteria.id,
            &resolved.code,
            &description,
            resolved.parent_id,
        )
        .await
        {
            Ok(Some(requirement)) => {
                tracing::info!(
                    requirement_id = id,
                    requirement_code = %requirement.requirement_code,
                    "Requirement updated"
                );
                return Ok(Json(Envelope::data(requirement)));
            }
            Ok(None) => {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "Requirement",
                    id,
                }))
            }
            Err(err) if resolved.auto_numbered
                && is_unique_violation(&err)
                && attempt < MAX_CODE_RETRIES =>
            {
                tracing::warn!(
                    attempt,
                    code = %resolved.code,
                    "Derived requirement code collided, re-deriving"
                );
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(AppError::InternalError(
        "Could not derive a unique requirement code".to_string(),
    ))
}

/// POST /requirements/delete
///
/// Bulk delete: body `{requirementIds: [..]}`.
pub async fn delete_bulk(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let ids = parse_id_list(&body, "requirementIds")?;
    let deleted = RequirementRepo::delete_by_ids(&state.pool, &ids).await?;
    if deleted == 0 {
        return Err(AppError::NotFound(
            "No requirements found for the given IDs".to_string(),
        ));
    }

    tracing::info!(count = deleted, "Requirements deleted");

    Ok(Json(DeleteResponse::new(deleted)))
}
