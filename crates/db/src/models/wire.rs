//! Deserialization helpers for the legacy wire format.
//!
//! The legacy frontend sends optional foreign keys as a number, a numeric
//! string, an empty string, the literal string `"null"`, JSON null, or
//! omits the field entirely. The last four all mean "no value".

use accredo_core::types::DbId;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Num(DbId),
    Str(String),
}

/// Deserialize an optional ID field, normalizing `""`, `"null"`, and null
/// to `None`. Use together with `#[serde(default)]` so absent fields also
/// become `None`.
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<DbId>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Num(n)) => Ok(Some(n)),
        Some(RawId::Str(s)) => {
            let s = s.trim();
            if s.is_empty() || s.eq_ignore_ascii_case("null") {
                Ok(None)
            } else {
                s.parse()
                    .map(Some)
                    .map_err(|_| serde::de::Error::custom(format!("invalid id: {s:?}")))
            }
        }
    }
}

/// Deserialize an optional string field, normalizing `""` and `"null"` to
/// `None`. Use together with `#[serde(default)]`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use accredo_core::types::DbId;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::opt_id")]
        id: Option<DbId>,
        #[serde(default, deserialize_with = "super::opt_string")]
        code: Option<String>,
    }

    #[test]
    fn number_and_string_ids() {
        let p: Probe = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(p.id, Some(7));
        let p: Probe = serde_json::from_str(r#"{"id": "7"}"#).unwrap();
        assert_eq!(p.id, Some(7));
    }

    #[test]
    fn null_forms_normalize() {
        for body in [r#"{}"#, r#"{"id": null}"#, r#"{"id": ""}"#, r#"{"id": "null"}"#] {
            let p: Probe = serde_json::from_str(body).unwrap();
            assert_eq!(p.id, None, "body: {body}");
        }
    }

    #[test]
    fn empty_string_code_normalizes() {
        let p: Probe = serde_json::from_str(r#"{"code": ""}"#).unwrap();
        assert_eq!(p.code, None);
        let p: Probe = serde_json::from_str(r#"{"code": "CUR.4"}"#).unwrap();
        assert_eq!(p.code.as_deref(), Some("CUR.4"));
    }
}
