//! # Script Helpers
//!
//! Small helpers for test script authors: human-readable duration rendering
//! for outcome names, and array-of-objects lookup for locating a created
//! resource inside a list response.

use serde_json::Value;

use crate::error::CheckError;
use crate::kind;

/// Render milliseconds as `"999ms"` below one second, `"1.5s"` above.
/// Display-only; comparison logic always stays in milliseconds.
pub fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{}s", ms as f64 / 1000.0)
    }
}

/// Find the index of the first object in `items` whose `key` property equals
/// `expected`. Returns `None` when no element matches, and a `Type` error
/// when `items` is not an array of objects.
pub fn index_of_object(
    items: &Value,
    key: &str,
    expected: &Value,
) -> Result<Option<usize>, CheckError> {
    let items = kind::require_array_of_objects("index_of_object", items)?;
    Ok(items.iter().position(|item| item.get(key) == Some(expected)))
}
