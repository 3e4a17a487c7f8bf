//! Hierarchical code derivation engine.
//!
//! Requirement and criteria codes follow a dot-segment convention: a child
//! of `CUR.4` is `CUR.4.1`, `CUR.4.2`, and so on. This module computes the
//! fully-qualified code to store for a new or edited node, given the raw
//! user input, the parent's code (if any), and the codes of existing
//! siblings in the same parent scope.

/// Failure signals from code derivation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodingError {
    /// No parent was given and the caller supplied an empty code.
    #[error("Requirement code is required")]
    MissingCode,

    /// No parent was given and the owning criteria's code is unavailable.
    #[error("Criteria code is required to qualify a requirement code")]
    MissingCriteria,
}

/// Parse the trailing dot-segment of a code as an integer.
///
/// Non-numeric trailing segments parse as 0, so a sibling named `P.final`
/// never blocks numbering but never advances it either.
///
/// # Examples
///
/// ```
/// use accredo_core::coding::trailing_suffix;
///
/// assert_eq!(trailing_suffix("CUR.4.12"), 12);
/// assert_eq!(trailing_suffix("7"), 7);
/// assert_eq!(trailing_suffix("CUR.4.final"), 0);
/// ```
pub fn trailing_suffix(code: &str) -> u64 {
    code.rsplit('.')
        .next()
        .and_then(|segment| segment.parse().ok())
        .unwrap_or(0)
}

/// Compute the next auto-generated child code under `parent_code`.
///
/// The suffix is `max(trailing suffix of each sibling) + 1`, starting at 1
/// when there are no siblings. Gaps left by deletions are not reused. The
/// maximum is taken numerically over every sibling, so `P.10` is correctly
/// recognized as greater than `P.9`.
///
/// # Examples
///
/// ```
/// use accredo_core::coding::next_child_code;
///
/// assert_eq!(next_child_code("P", &[]), "P.1");
/// assert_eq!(
///     next_child_code("P", &["P.1".into(), "P.2".into(), "P.5".into()]),
///     "P.6"
/// );
/// assert_eq!(
///     next_child_code("P", &["P.9".into(), "P.10".into()]),
///     "P.11"
/// );
/// ```
pub fn next_child_code(parent_code: &str, sibling_codes: &[String]) -> String {
    let max_suffix = sibling_codes
        .iter()
        .map(|code| trailing_suffix(code))
        .max()
        .unwrap_or(0);
    format!("{parent_code}.{}", max_suffix + 1)
}

/// Qualify a user-supplied code against a parent or owning-scope code.
///
/// A bare value (no dot) is treated as a suffix and prefixed with
/// `scope_code`; a dotted value is taken verbatim, the caller asserting a
/// fully-qualified code.
///
/// # Examples
///
/// ```
/// use accredo_core::coding::qualify_child_code;
///
/// assert_eq!(qualify_child_code("CUR.4", "1"), "CUR.4.1");
/// assert_eq!(qualify_child_code("CUR.4", "X.9"), "X.9");
/// ```
pub fn qualify_child_code(scope_code: &str, raw: &str) -> String {
    if raw.contains('.') {
        raw.to_string()
    } else {
        format!("{scope_code}.{raw}")
    }
}

/// Derive the stored code for a requirement.
///
/// The decision table, applied identically on create and update:
///
/// - parent present, no code supplied: auto-number under the parent
///   ([`next_child_code`] over the parent's existing children).
/// - parent present, bare code supplied: `parent.code`.
/// - parent present, dotted code supplied: verbatim.
/// - no parent: code is required; a bare code is qualified with the owning
///   criteria's code, a dotted code is verbatim.
///
/// `sibling_codes` must hold the codes of the parent's current children and
/// is only consulted on the auto-numbering path.
pub fn derive_requirement_code(
    raw: &str,
    parent_code: Option<&str>,
    criteria_code: Option<&str>,
    sibling_codes: &[String],
) -> Result<String, CodingError> {
    let raw = raw.trim();

    if let Some(parent) = parent_code {
        if raw.is_empty() {
            return Ok(next_child_code(parent, sibling_codes));
        }
        return Ok(qualify_child_code(parent, raw));
    }

    if raw.is_empty() {
        return Err(CodingError::MissingCode);
    }
    let criteria = criteria_code.ok_or(CodingError::MissingCriteria)?;
    Ok(qualify_child_code(criteria, raw))
}
