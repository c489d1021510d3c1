//! Canonical structured encoding for module messages.
//!
//! A [`Codec`] maps Rust types to registered concrete names and encodes
//! registered values as a `{"type": name, "value": ...}` envelope. Once every
//! type is registered the codec is sealed; encoding with an unsealed codec is a
//! configuration error. [`sort_json`] rewrites any JSON document with
//! lexicographically ordered object keys, which is the form that gets signed.

pub mod codec;
pub mod error;
pub mod sort;

pub use codec::{Codec, Encoder, MAX_JSON_SIZE};
pub use error::CodecError;
pub use sort::sort_json;
