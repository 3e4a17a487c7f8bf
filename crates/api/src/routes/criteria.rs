//! Route definitions for the `/criteria` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::criteria;
use crate::state::AppState;

/// Routes mounted at `/criteria`.
///
/// ```text
/// POST   /add                -> create
/// PUT    /{id}               -> update
/// DELETE /delete             -> delete_bulk ({criteriaIds: [..]})
/// GET    /area/{area_id}     -> list_by_area
/// GET    /event/{event_id}   -> list_by_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(criteria::create))
        .route("/delete", delete(criteria::delete_bulk))
        .route("/area/{area_id}", get(criteria::list_by_area))
        .route("/event/{event_id}", get(criteria::list_by_event))
        .route("/{id}", put(criteria::update))
}
