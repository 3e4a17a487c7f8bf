//! Route definitions for the setup wizard.

use axum::routing::post;
use axum::Router;

use crate::handlers::setup;
use crate::state::AppState;

/// Routes mounted at `/setup`.
///
/// ```text
/// POST /framework -> create_framework (one transaction for the whole plan)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/framework", post(setup::create_framework))
}
