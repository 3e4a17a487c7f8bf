//! Domain logic for the accredo compliance-audit backend.
//!
//! Pure, I/O-free code: the hierarchical code derivation engine, the
//! domain error taxonomy, and shared type aliases. Persistence lives in
//! `accredo-db`, HTTP in `accredo-api`.

pub mod coding;
pub mod error;
pub mod types;
