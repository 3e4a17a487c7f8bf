//! Health check route.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppResult;
use crate::state::AppState;

/// Routes mounted at the application root.
///
/// ```text
/// GET /health -> liveness + database round-trip
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health
async fn health(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    accredo_db::health_check(&state.pool).await?;
    Ok(Json(serde_json::json!({
        "status": "ok",
        "database": "connected",
    })))
}
