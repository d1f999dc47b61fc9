//! Canonical bytes through the `bcs` crate.
//!
//! Fixed-width integers are little-endian in their native width. Only lengths,
//! counts and enum discriminants use ULEB128. The public types keep their JSON
//! serde forms; their canonical shapes live in [`crate::wire`].

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Types with a canonical byte encoding.
pub trait CanonicalSerialize {
    /// Canonical bytes of `self`.
    fn to_bcs_bytes(&self) -> Result<Vec<u8>, CodecError>;
}

/// Types that can be read back from their canonical encoding.
pub trait CanonicalDeserialize: Sized {
    /// Decode a complete value, rejecting trailing bytes.
    fn from_bcs_bytes(bytes: &[u8]) -> Result<Self, CodecError>;
}

/// Container depth allowed by `bcs` on the wire shapes.
///
/// Covers a transaction whose type arguments sit at the type-tag nesting limit,
/// and stops hostile input long before the stack is at risk.
pub const CONTAINER_DEPTH_LIMIT: usize = 32;

pub(crate) fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(bcs::to_bytes_with_limit(value, CONTAINER_DEPTH_LIMIT)?)
}

pub(crate) fn from_bytes<'a, T: Deserialize<'a>>(bytes: &'a [u8]) -> Result<T, CodecError> {
    Ok(bcs::from_bytes_with_limit(bytes, CONTAINER_DEPTH_LIMIT)?)
}
