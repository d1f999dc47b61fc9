//! 32-byte account addresses.
//!
//! Addresses are often written in different forms:
//! - Short form: "0x1"
//! - Full form: "0x0000000000000000000000000000000000000000000000000000000000000001"
//! - Without prefix: "1"
//!
//! All of them parse to the same [`Address`]. The canonical text form is always
//! the full form, lowercase, with a `0x` prefix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{self, CanonicalDeserialize, CanonicalSerialize};
use crate::error::{CodecError, ParseError};

/// Number of bytes in an address.
pub const ADDRESS_LENGTH: usize = 32;

/// A 32-byte account, module or resource address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The all-zero address, used as the "unset" sentinel for transaction senders.
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    /// The framework address `0x1`.
    pub const ONE: Address = Address([
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 1,
    ]);

    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Address(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, ParseError> {
        let arr: [u8; ADDRESS_LENGTH] = bytes
            .try_into()
            .map_err(|_| ParseError::InvalidAddress(format!("0x{}", hex::encode(bytes))))?;
        Ok(Address(arr))
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LENGTH]
    }

    /// Parse a hex address with optional `0x`/`0X` prefix, left-padding short forms.
    ///
    /// # Examples
    ///
    /// ```
    /// use move_txn_types::Address;
    ///
    /// let addr = Address::from_hex_literal("0x1").unwrap();
    /// assert_eq!(addr, Address::ONE);
    /// assert!(Address::from_hex_literal("0xnot-hex").is_err());
    /// ```
    pub fn from_hex_literal(s: &str) -> Result<Self, ParseError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty()
            || digits.len() > ADDRESS_LENGTH * 2
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(ParseError::InvalidAddress(s.to_string()));
        }
        let padded = format!("{:0>64}", digits);
        let bytes = hex::decode(padded).map_err(|_| ParseError::InvalidAddress(s.to_string()))?;
        Address::from_slice(&bytes)
    }

    /// Full-form text: `0x` followed by 64 lowercase hex digits.
    pub fn to_hex_literal(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Minimal text form with leading zeros trimmed (`0x1`).
    pub fn to_short_string(&self) -> String {
        let full = hex::encode(self.0);
        let trimmed = full.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{}", trimmed)
        }
    }
}

/// Normalize an address string to the full form, or `None` if it is not an address.
///
/// # Examples
///
/// ```
/// use move_txn_types::address::normalize_address;
///
/// assert_eq!(
///     normalize_address("0x2").as_deref(),
///     Some("0x0000000000000000000000000000000000000000000000000000000000000002")
/// );
/// assert_eq!(normalize_address("not-hex"), None);
/// ```
pub fn normalize_address(addr: &str) -> Option<String> {
    Address::from_hex_literal(addr.trim())
        .ok()
        .map(|a| a.to_hex_literal())
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_literal())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_short_string())
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_hex_literal(s)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Address(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl CanonicalSerialize for Address {
    fn to_bcs_bytes(&self) -> Result<Vec<u8>, CodecError> {
        codec::to_bytes(&self.0)
    }
}

impl CanonicalDeserialize for Address {
    fn from_bcs_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        codec::from_bytes::<[u8; ADDRESS_LENGTH]>(bytes).map(Address)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_literal())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Address::from_hex_literal(&s).map_err(serde::de::Error::custom)
    }
}
