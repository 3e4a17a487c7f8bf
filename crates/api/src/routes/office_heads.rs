//! Route definitions for the `/office-heads` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::office_heads;
use crate::state::AppState;

/// Routes mounted at `/office-heads`.
///
/// ```text
/// GET  /          -> list
/// POST /          -> create (duplicate email -> 409)
/// PUT  /{id}      -> update
/// POST /delete    -> delete_bulk ({headIds: [..]})
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(office_heads::list).post(office_heads::create))
        .route("/delete", post(office_heads::delete_bulk))
        .route("/{id}", put(office_heads::update))
}
