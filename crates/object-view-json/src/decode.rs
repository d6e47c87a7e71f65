//! JSON decoding.

use serde_json::{Map, Value};

use crate::error::DecodeError;

/// Decodes JSON text. With `as_map` set, the top-level value must be an
/// object.
pub fn decode(text: &str, as_map: bool) -> Result<Value, DecodeError> {
    let value: Value = serde_json::from_str(text)?;
    if as_map && !value.is_object() {
        return Err(DecodeError::NotAnObject(kind_of(&value)));
    }
    Ok(value)
}

/// Decodes JSON text whose top-level value must be an object.
pub fn decode_map(text: &str) -> Result<Map<String, Value>, DecodeError> {
    match serde_json::from_str(text)? {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::NotAnObject(kind_of(&other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
