//! Scalar value checks shared by the record validators.

use bibrec_schemas::ValueKind;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// True if `text` is an RFC 3339 timestamp, `YYYY-MM-DD HH:MM:SS`, or `YYYY-MM-DD`.
pub fn is_timestamp(text: &str) -> bool {
    DateTime::parse_from_rfc3339(text).is_ok()
        || NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}

/// Reads a field value of the given kind as the string stored on the record.
///
/// Text, date and timestamp fields take strings only. Number fields also take
/// JSON numbers, kept in their decimal form. `None` means the value has the
/// wrong JSON kind.
pub fn coerce_field(kind: ValueKind, value: &Value) -> Option<String> {
    match (kind, value) {
        (_, Value::String(text)) => Some(text.clone()),
        (ValueKind::Number, Value::Number(number)) => Some(number.to_string()),
        _ => None,
    }
}

/// Short name of a JSON value's kind, for messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
