//! HTTP layer for the accredo compliance-audit backend.
//!
//! Exposes the legacy REST surface (envelope `{success, message?, data?,
//! error?}`, PascalCase field names) over the repositories in `accredo-db`
//! and the derivation engine in `accredo-core`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
