//! Entity service handlers.
//!
//! Each module validates required fields, resolves parent references,
//! derives codes where the entity calls for it, and maps repository
//! results into the legacy response envelope.

pub mod areas;
pub mod criteria;
pub mod events;
pub mod office_heads;
pub mod offices;
pub mod requirements;
pub mod setup;

use accredo_core::types::DbId;

use crate::error::AppError;

/// Extract a required string field, trimming whitespace. Missing or blank
/// values become a 400 with the legacy `"<Field> is required"` message.
pub(crate) fn require_field<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("{field} is required"))),
    }
}

/// Extract a required ID field.
pub(crate) fn require_id(value: Option<DbId>, field: &str) -> Result<DbId, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("{field} is required")))
}

/// Parse a bulk-delete ID list out of a raw JSON body.
///
/// The list must be present, an array, non-empty, and all integers;
/// anything else is a 400, matching the legacy validation messages.
pub(crate) fn parse_id_list(
    body: &serde_json::Value,
    field: &str,
) -> Result<Vec<DbId>, AppError> {
    let value = body
        .get(field)
        .filter(|v| !v.is_null())
        .ok_or_else(|| AppError::BadRequest(format!("{field} is required")))?;

    let items = value
        .as_array()
        .ok_or_else(|| AppError::BadRequest(format!("{field} must be an array of IDs")))?;

    if items.is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }

    items
        .iter()
        .map(|item| {
            item.as_i64()
                .ok_or_else(|| AppError::BadRequest(format!("{field} must contain integer IDs")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_field_trims_and_rejects_blank() {
        assert_eq!(require_field(Some("  E1  "), "EventCode").unwrap(), "E1");
        assert!(require_field(Some("   "), "EventCode").is_err());
        assert!(require_field(None, "EventCode").is_err());
    }

    #[test]
    fn id_list_rejects_missing_and_empty() {
        let body = serde_json::json!({});
        assert!(parse_id_list(&body, "criteriaIds").is_err());

        let body = serde_json::json!({ "criteriaIds": [] });
        assert!(parse_id_list(&body, "criteriaIds").is_err());

        let body = serde_json::json!({ "criteriaIds": "1,2" });
        assert!(parse_id_list(&body, "criteriaIds").is_err());
    }

    #[test]
    fn id_list_parses_integers() {
        let body = serde_json::json!({ "criteriaIds": [3, 1, 2] });
        assert_eq!(parse_id_list(&body, "criteriaIds").unwrap(), vec![3, 1, 2]);

        let body = serde_json::json!({ "criteriaIds": [1, "x"] });
        assert!(parse_id_list(&body, "criteriaIds").is_err());
    }
}
