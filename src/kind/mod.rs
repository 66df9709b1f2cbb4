//! # Runtime Kind Detection
//!
//! Classifies `serde_json::Value`s into a closed set of kinds and provides
//! the precondition validators shared by the check functions. Arrays, objects
//! and null are distinct kinds here; a validator never raises on its own
//! behalf — each takes the name of the public function it guards so the
//! resulting error points at the caller's mistake.

use serde_json::Value;
use std::fmt;

use crate::error::CheckError;

/// The runtime classification of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Classify a JSON value.
pub fn kind_of(value: &Value) -> Kind {
    match value {
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Bool,
        Value::Number(_) => Kind::Number,
        Value::String(_) => Kind::String,
        Value::Array(_) => Kind::Array,
        Value::Object(_) => Kind::Object,
    }
}

/// Require `value` to be object-kind (not array, not null).
pub fn require_object(function: &'static str, value: &Value) -> Result<(), CheckError> {
    if kind_of(value) == Kind::Object {
        Ok(())
    } else {
        Err(CheckError::type_mismatch(function, "an object"))
    }
}

/// Require `value` to be an array whose every element is object-kind.
/// Returns the element slice so callers need not re-match.
pub fn require_array_of_objects<'a>(
    function: &'static str,
    value: &'a Value,
) -> Result<&'a [Value], CheckError> {
    let Value::Array(items) = value else {
        return Err(CheckError::type_mismatch(function, "an array of objects"));
    };
    if items.iter().all(|item| kind_of(item) == Kind::Object) {
        Ok(items)
    } else {
        Err(CheckError::type_mismatch(function, "an array of objects"))
    }
}

/// Require `min <= max` for range-generation helpers.
pub fn require_bounds(function: &'static str, min: i64, max: i64) -> Result<(), CheckError> {
    if min <= max {
        Ok(())
    } else {
        Err(CheckError::out_of_range(
            function,
            format!("min must not exceed max (got min {min}, max {max})"),
        ))
    }
}

/// Require a strictly positive millisecond value.
pub fn require_positive_ms(function: &'static str, ms: u64) -> Result<(), CheckError> {
    if ms > 0 {
        Ok(())
    } else {
        Err(CheckError::out_of_range(
            function,
            "time limit must be greater than zero".to_string(),
        ))
    }
}
