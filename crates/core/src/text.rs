//! Canonical text normalization for fields that may arrive as JSON numbers
//! or strings (`budget`, `year`, ids).
//!
//! Both the service (when accepting payloads) and the client (when reading
//! responses) go through these functions so the coercion rules live in
//! exactly one place:
//!
//! | Input              | `canonical_text` | `canonical_id` |
//! |--------------------|------------------|----------------|
//! | `"$3M"`            | `"$3M"`          | `None`         |
//! | `5000000`          | `"5000000"`      | `5000000`      |
//! | `"42"`             | `"42"`           | `42`           |
//! | `null` / absent    | `None`           | `None`         |
//! | bool/array/object  | `None`           | `None`         |

use serde_json::Value;

use crate::types::DbId;

/// Convert a number-or-text JSON value into its canonical text form.
///
/// Strings are returned verbatim (no trimming, no re-formatting). Integers
/// render without a fractional part.
pub fn canonical_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Convert a number-or-text JSON value into an entry id.
pub fn canonical_id(value: &Value) -> Option<DbId> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
