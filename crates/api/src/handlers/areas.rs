//! Handlers for the `/areas` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use accredo_core::error::CoreError;
use accredo_core::types::DbId;
use accredo_db::models::area::CreateArea;
use accredo_db::repositories::{AreaRepo, EventRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{require_field, require_id};
use crate::response::Envelope;
use crate::state::AppState;

/// GET /areas
///
/// List all active areas.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let areas = AreaRepo::list_active(&state.pool).await?;
    Ok(Json(Envelope::data(areas)))
}

/// GET /areas/event/{event_id}
pub async fn list_by_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let areas = AreaRepo::list_by_event(&state.pool, event_id).await?;
    Ok(Json(Envelope::data(areas)))
}

/// POST /areas/add
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArea>,
) -> AppResult<impl IntoResponse> {
    let event_id = require_id(input.event_id, "EventChildID")?;
    let area_code = require_field(input.area_code.as_deref(), "AreaCode")?;
    let area_name = require_field(input.area_name.as_deref(), "AreaName")?;

    EventRepo::find_by_id(&state.pool, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    let area = AreaRepo::create(
        &state.pool,
        event_id,
        area_code,
        area_name,
        input.description.as_deref(),
        input.sort_order,
    )
    .await?;

    tracing::info!(area_id = area.id, area_code = %area.area_code, event_id, "Area created");

    Ok((StatusCode::CREATED, Json(Envelope::data(area))))
}

/// DELETE /areas/{id}
///
/// Soft-delete: deactivates the area so listings stop returning it.
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deactivated = AreaRepo::deactivate(&state.pool, id).await?;
    if !deactivated {
        return Err(AppError::Core(CoreError::NotFound { entity: "Area", id }));
    }

    tracing::info!(area_id = id, "Area deactivated");

    Ok(Json(Envelope::message("Area deactivated")))
}
