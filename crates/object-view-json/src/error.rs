//! Codec error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Syntax(#[from] serde_json::Error),
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("value of type `{type_name}` has no JSON representation")]
    Unrepresentable { type_name: String },
    #[error("non-finite number {0} has no JSON representation")]
    NonFinite(f64),
    #[error("nesting exceeds {limit} levels, the value is probably cyclic")]
    DepthExceeded { limit: usize },
}
