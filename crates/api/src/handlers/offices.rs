//! Handlers for the `/offices` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use accredo_core::error::CoreError;
use accredo_core::types::DbId;
use accredo_db::models::office::{CreateOffice, UpdateOffice};
use accredo_db::repositories::OfficeRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_field;
use crate::response::Envelope;
use crate::state::AppState;

/// GET /offices
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let offices = OfficeRepo::list(&state.pool).await?;
    Ok(Json(Envelope::data(offices)))
}

/// GET /offices/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let office = OfficeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Office", id }))?;
    Ok(Json(Envelope::data(office)))
}

/// POST /offices
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOffice>,
) -> AppResult<impl IntoResponse> {
    let office_name = require_field(input.office_name.as_deref(), "OfficeName")?;

    let office = OfficeRepo::create(
        &state.pool,
        office_name,
        input.office_type.as_deref(),
        input.description.as_deref(),
    )
    .await?;

    tracing::info!(office_id = office.id, office_name = %office.office_name, "Office created");

    Ok((StatusCode::CREATED, Json(Envelope::data(office))))
}

/// PUT /offices/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOffice>,
) -> AppResult<impl IntoResponse> {
    let office = OfficeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Office", id }))?;

    tracing::info!(office_id = id, "Office updated");

    Ok(Json(Envelope::data(office)))
}

/// DELETE /offices/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = OfficeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Office", id }));
    }

    tracing::info!(office_id = id, "Office deleted");

    Ok(Json(Envelope::message("Office deleted")))
}
