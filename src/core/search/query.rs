//! Query parameter handling.
//!
//! The `top` parameter arrives as free text. Absent or blank means
//! the default. Anything else is parsed untrimmed, so a padded value
//! such as `" 7 "` is malformed. A malformed value is an
//! [`AutocompleteError::InvalidLimit`] that callers recover from by
//! falling back to the default. Negative values are valid and produce
//! an empty result.

use crate::core::error::{AutocompleteError, Result};
use serde::{Deserialize, Serialize};

/// Autocomplete request parameters as received from a caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteQuery {
    /// Prefix to complete; absent means empty
    #[serde(default)]
    pub term: String,

    /// Requested result count, unparsed
    #[serde(default)]
    pub top: Option<String>,
}

/// Parse a `top` value.
///
/// # Errors
///
/// - `InvalidLimit`: the value is present but not an integer, padding included
pub fn parse_limit(top: Option<&str>, default: usize) -> Result<i64> {
    let Some(raw) = top.filter(|t| !t.trim().is_empty()) else {
        return Ok(default as i64);
    };

    raw.parse::<i64>()
        .map_err(|e| AutocompleteError::InvalidLimit(format!("'{raw}': {e}")))
}

/// Parse a `top` value, substituting `default` when it is malformed
pub fn resolve_limit(top: Option<&str>, default: usize) -> i64 {
    parse_limit(top, default).unwrap_or_else(|err| {
        tracing::debug!(error = %err, default, "Using default limit");
        default as i64
    })
}
