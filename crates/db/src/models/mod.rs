//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for edits
//!
//! Wire field names keep the legacy frontend's PascalCase spelling
//! (`EventID`, `AreaCode`, ...) via serde renames; columns stay snake_case.

pub mod area;
pub mod criteria;
pub mod event;
pub mod office;
pub mod office_head;
pub mod requirement;
pub mod setup;
pub mod wire;
