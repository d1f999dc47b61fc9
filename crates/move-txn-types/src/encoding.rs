//! Hex and hashing helpers shared by the workspace.

use sha3::{Digest, Sha3_256};

use crate::error::ParseError;

// =============================================================================
// Hex
// =============================================================================

/// Decode a hex string (with or without `0x`) to bytes.
///
/// An empty string and a bare `0x` both decode to no bytes.
pub fn parse_hex_bytes(hex_str: &str) -> Result<Vec<u8>, ParseError> {
    let trimmed = hex_str.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).map_err(|_| ParseError::InvalidHex(hex_str.to_string()))
}

/// Decode exactly `N` bytes of hex.
pub fn parse_hex_array<const N: usize>(hex_str: &str) -> Result<[u8; N], ParseError> {
    parse_hex_bytes(hex_str)?
        .try_into()
        .map_err(|_| ParseError::InvalidHex(hex_str.to_string()))
}

/// `0x`-prefixed lowercase hex.
pub fn to_hex_literal(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

// =============================================================================
// Hashing
// =============================================================================

/// SHA3-256 over the concatenation of `parts`.
pub fn sha3_256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}
