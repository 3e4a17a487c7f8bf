//! Route definitions for the `/requirements` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::requirements;
use crate::state::AppState;

/// Routes mounted at `/requirements`.
///
/// ```text
/// GET  /all?eventId=        -> list_all (joined, optionally filtered)
/// GET  /event/{event_id}    -> list_by_event
/// POST /add                 -> create (derives the stored code)
/// PUT  /update/{id}         -> update (same derivation)
/// POST /delete              -> delete_bulk ({requirementIds: [..]})
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(requirements::list_all))
        .route("/event/{event_id}", get(requirements::list_by_event))
        .route("/add", post(requirements::create))
        .route("/update/{id}", put(requirements::update))
        .route("/delete", post(requirements::delete_bulk))
}
