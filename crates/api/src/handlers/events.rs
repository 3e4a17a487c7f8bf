//! Handlers for the `/events` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use accredo_core::error::CoreError;
use accredo_core::types::DbId;
use accredo_db::models::event::{CreateEvent, UpdateEvent};
use accredo_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{parse_id_list, require_field};
use crate::response::{DeleteResponse, Envelope};
use crate::state::AppState;

/// GET /events
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let events = EventRepo::list(&state.pool).await?;
    Ok(Json(Envelope::data(events)))
}

/// GET /events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(Envelope::data(event)))
}

/// POST /events
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    let event_code = require_field(input.event_code.as_deref(), "EventCode")?;
    let event_name = require_field(input.event_name.as_deref(), "EventName")?;

    let event = EventRepo::create(
        &state.pool,
        event_code,
        event_name,
        input.description.as_deref(),
    )
    .await?;

    tracing::info!(event_id = event.id, event_code = %event.event_code, "Event created");

    Ok((StatusCode::CREATED, Json(Envelope::data(event))))
}

/// PUT /events/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    tracing::info!(event_id = id, "Event updated");

    Ok(Json(Envelope::data(event)))
}

/// DELETE /events/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = EventRepo::delete_by_ids(&state.pool, &[id]).await?;
    if deleted == 0 {
        return Err(AppError::Core(CoreError::NotFound { entity: "Event", id }));
    }

    tracing::info!(event_id = id, "Event deleted");

    Ok(Json(Envelope::message("Event deleted")))
}

/// DELETE /events/delete
///
/// Bulk delete: body `{eventIds: [..]}`.
pub async fn delete_bulk(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let ids = parse_id_list(&body, "eventIds")?;
    let deleted = EventRepo::delete_by_ids(&state.pool, &ids).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("No events found for the given IDs".to_string()));
    }

    tracing::info!(count = deleted, "Events deleted");

    Ok(Json(DeleteResponse::new(deleted)))
}
