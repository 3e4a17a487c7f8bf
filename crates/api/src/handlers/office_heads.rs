//! Handlers for the `/office-heads` resource.
//!
//! A duplicate email trips `uq_office_heads_email` and surfaces as 409.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use accredo_core::error::CoreError;
use accredo_core::types::DbId;
use accredo_db::models::office_head::{CreateOfficeHead, UpdateOfficeHead};
use accredo_db::repositories::{OfficeHeadRepo, OfficeRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{parse_id_list, require_field, require_id};
use crate::response::{DeleteResponse, Envelope};
use crate::state::AppState;

/// GET /office-heads
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let heads = OfficeHeadRepo::list(&state.pool).await?;
    Ok(Json(Envelope::data(heads)))
}

/// POST /office-heads
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOfficeHead>,
) -> AppResult<impl IntoResponse> {
    let office_id = require_id(input.office_id, "OfficeID")?;
    let head_name = require_field(input.head_name.as_deref(), "HeadName")?;
    let email = require_field(input.email.as_deref(), "Email")?;

    OfficeRepo::find_by_id(&state.pool, office_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Office",
            id: office_id,
        }))?;

    let head = OfficeHeadRepo::create(
        &state.pool,
        office_id,
        head_name,
        email,
        input.position.as_deref(),
    )
    .await?;

    tracing::info!(head_id = head.id, office_id, "Office head created");

    Ok((StatusCode::CREATED, Json(Envelope::data(head))))
}

/// PUT /office-heads/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOfficeHead>,
) -> AppResult<impl IntoResponse> {
    let head = OfficeHeadRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "OfficeHead",
            id,
        }))?;

    tracing::info!(head_id = id, "Office head updated");

    Ok(Json(Envelope::data(head)))
}

/// POST /office-heads/delete
///
/// Bulk delete: body `{headIds: [..]}`.
pub async fn delete_bulk(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let ids = parse_id_list(&body, "headIds")?;
    let deleted = OfficeHeadRepo::delete_by_ids(&state.pool, &ids).await?;
    if deleted == 0 {
        return Err(AppError::NotFound(
            "No office heads found for the given IDs".to_string(),
        ));
    }

    tracing::info!(count = deleted, "Office heads deleted");

    Ok(Json(DeleteResponse::new(deleted)))
}
