//! Route definitions for the `/offices` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::offices;
use crate::state::AppState;

/// Routes mounted at `/offices`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(offices::list).post(offices::create))
        .route(
            "/{id}",
            get(offices::get_by_id)
                .put(offices::update)
                .delete(offices::delete),
        )
}
