//! Error types surfaced by object views and their hosts.

use object_view_json::{DecodeError, EncodeError};
use thiserror::Error;

/// Failure raised by a host's property accessors.
///
/// Object views never create these on their own behalf beyond what the
/// host reports; they are passed through unchanged.
#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("unknown property `{name}`")]
    Unknown { name: String },
    #[error("property `{name}` is not set")]
    Unset { name: String },
    #[error("invalid value for property `{name}`: {reason}")]
    InvalidValue { name: String, reason: String },
}

impl PropertyError {
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::Unknown { name: name.into() }
    }

    pub fn unset(name: impl Into<String>) -> Self {
        Self::Unset { name: name.into() }
    }

    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ObjectViewError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Property(#[from] PropertyError),
}
