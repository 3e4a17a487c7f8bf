//! Route definitions for the `/areas` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::areas;
use crate::state::AppState;

/// Routes mounted at `/areas`.
///
/// ```text
/// GET    /                   -> list (active only)
/// POST   /add                -> create
/// GET    /event/{event_id}   -> list_by_event
/// DELETE /{id}               -> deactivate (soft-delete)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(areas::list))
        .route("/add", post(areas::create))
        .route("/event/{event_id}", get(areas::list_by_event))
        .route("/{id}", delete(areas::deactivate))
}
