//! Route definitions.
//!
//! Paths are mounted at the root (no version prefix): the legacy frontend
//! calls `/areas/add`, `/requirements/update/{id}`, and friends directly.

pub mod areas;
pub mod criteria;
pub mod events;
pub mod health;
pub mod office_heads;
pub mod offices;
pub mod requirements;
pub mod setup;

use axum::Router;

use crate::state::AppState;

/// Build the full resource route tree.
///
/// ```text
/// /events            event CRUD + bulk delete
/// /areas             area listing, add, soft-delete
/// /criteria          criteria tree CRUD + bulk delete
/// /requirements      requirement tree CRUD + bulk delete
/// /offices           office CRUD
/// /office-heads      office head CRUD + bulk delete
/// /setup             transactional framework wizard
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/events", events::router())
        .nest("/areas", areas::router())
        .nest("/criteria", criteria::router())
        .nest("/requirements", requirements::router())
        .nest("/offices", offices::router())
        .nest("/office-heads", office_heads::router())
        .nest("/setup", setup::router())
}
