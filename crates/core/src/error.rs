use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Assigning the proposed parent would make the node its own ancestor.
    #[error("Cycle detected: {entity} {id} cannot be its own ancestor")]
    CycleDetected { entity: &'static str, id: DbId },

    #[error("Internal error: {0}")]
    Internal(String),
}
