//! object-view-json - JSON codec for object-view DTOs.
//!
//! Provides [`encode`] with formatting flags ([`EncodeOptions`]) and
//! [`decode`]/[`decode_map`] for reading JSON text. Object key order is
//! preserved in both directions.

mod decode;
mod encode;
mod error;
mod options;
mod pretty;

pub use decode::{decode, decode_map};
pub use encode::encode;
pub use error::{DecodeError, EncodeError};
pub use options::EncodeOptions;
pub use pretty::pretty_one_line;
