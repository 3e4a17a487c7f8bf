//! Shared response envelope types for API handlers.
//!
//! Every response uses the legacy `{success, message?, data?}` envelope the
//! frontend already consumes. Use these structs instead of ad-hoc
//! `serde_json::json!` so the shape stays consistent and type-checked.

use serde::Serialize;

/// Standard success envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Envelope::data(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// `{success: true, data}`.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// `{success: true, message}` with no data payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Bulk-delete envelope: `{success: true, deletedCount}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

impl DeleteResponse {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            success: true,
            deleted_count,
        }
    }
}
