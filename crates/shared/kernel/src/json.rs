//! Helpers for untyped (JSON) inputs such as persisted keyword columns.

use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// JSON type name used in type error reports
pub fn type_name_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrow `value` as an array.
///
/// # Errors
/// Returns `DomainError::Type` naming the actual JSON type otherwise.
pub fn expect_array<'a>(field: &'static str, value: &'a Value) -> DomainResult<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| DomainError::wrong_type(field, "array", type_name_of(value)))
}

/// Borrow `value` as a string.
///
/// # Errors
/// Returns `DomainError::Type` naming the actual JSON type otherwise.
pub fn expect_str<'a>(field: &'static str, value: &'a Value) -> DomainResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| DomainError::wrong_type(field, "string", type_name_of(value)))
}
