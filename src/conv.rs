//! Typed views over dynamic value slices.
//!
//! Provider frameworks hand collection attributes over as untyped JSON
//! values. These conversions produce typed vectors of the same length,
//! substituting the zero value for entries of the wrong kind instead of
//! failing.

use serde_json::Value;

/// Converts a value slice to integers; anything that is not an integer
/// number becomes `0`.
pub fn int_slice(values: &[Value]) -> Vec<i64> {
    values.iter().map(|v| v.as_i64().unwrap_or(0)).collect()
}

/// Converts a value slice to owned strings; non-string entries become `""`.
pub fn string_slice(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.as_str().unwrap_or("").to_string())
        .collect()
}
