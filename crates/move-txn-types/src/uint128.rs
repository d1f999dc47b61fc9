//! Unsigned 128-bit integer with decimal-string JSON representation.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{self, CanonicalDeserialize, CanonicalSerialize};
use crate::error::{CodecError, ParseError};

/// A `u128` that crosses the JSON boundary as a decimal string.
///
/// Canonical bytes are 16 bytes little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Uint128(pub u128);

impl Uint128 {
    pub const ZERO: Uint128 = Uint128(0);
    pub const MAX: Uint128 = Uint128(u128::MAX);

    /// Build from the low and high 64-bit halves.
    pub fn from_parts(lo: u64, hi: u64) -> Self {
        Uint128((u128::from(hi) << 64) | u128::from(lo))
    }

    pub fn lo(&self) -> u64 {
        self.0 as u64
    }

    pub fn hi(&self) -> u64 {
        (self.0 >> 64) as u64
    }

    /// Parse decimal text, rejecting negatives and values of 2^128 or more.
    pub fn parse_decimal(s: &str) -> Result<Self, CodecError> {
        let digits = s.trim();
        if let Some(rest) = digits.strip_prefix('-') {
            if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CodecError::Overflow {
                    target: "u128",
                    detail: digits.to_string(),
                });
            }
        }
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidInteger(s.to_string()).into());
        }
        digits
            .parse::<u128>()
            .map(Uint128)
            .map_err(|_| CodecError::Overflow {
                target: "u128",
                detail: digits.to_string(),
            })
    }
}

impl From<u128> for Uint128 {
    fn from(v: u128) -> Self {
        Uint128(v)
    }
}

impl From<u64> for Uint128 {
    fn from(v: u64) -> Self {
        Uint128(u128::from(v))
    }
}

impl From<Uint128> for u128 {
    fn from(v: Uint128) -> Self {
        v.0
    }
}

impl fmt::Display for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Uint128 {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uint128::parse_decimal(s)
    }
}

impl CanonicalSerialize for Uint128 {
    fn to_bcs_bytes(&self) -> Result<Vec<u8>, CodecError> {
        codec::to_bytes(&self.0)
    }
}

impl CanonicalDeserialize for Uint128 {
    fn from_bcs_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        codec::from_bytes::<u128>(bytes).map(Uint128)
    }
}

impl Serialize for Uint128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Uint128 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(Uint128Visitor)
    }
}

struct Uint128Visitor;

impl Visitor<'_> for Uint128Visitor {
    type Value = Uint128;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an unsigned 128-bit integer as a decimal string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Uint128, E> {
        Uint128::parse_decimal(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Uint128, E> {
        Ok(Uint128::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Uint128, E> {
        Ok(Uint128(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Uint128, E> {
        u128::try_from(v)
            .map(Uint128)
            .map_err(|_| E::custom(format!("value {v} overflows u128")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        let v = Uint128::from_parts(1, 2);
        assert_eq!(v.0, (2u128 << 64) + 1);
        assert_eq!(v.lo(), 1);
        assert_eq!(v.hi(), 2);
    }

    #[test]
    fn test_bytes_little_endian() {
        let mut expected = vec![0u8; 16];
        expected[0] = 0x01;
        expected[8] = 0x02;
        assert_eq!(Uint128::from_parts(1, 2).to_bcs_bytes().unwrap(), expected);
        assert_eq!(Uint128::ZERO.to_bcs_bytes().unwrap(), vec![0u8; 16]);
        assert_eq!(Uint128::from_bcs_bytes(&expected).unwrap(), Uint128::from_parts(1, 2));
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            "340282366920938463463374607431768211455".parse::<Uint128>().unwrap(),
            Uint128::MAX
        );
        assert!(matches!(
            "340282366920938463463374607431768211456".parse::<Uint128>(),
            Err(CodecError::Overflow { target: "u128", .. })
        ));
        assert!(matches!(
            "-1".parse::<Uint128>(),
            Err(CodecError::Overflow { target: "u128", .. })
        ));
        assert!(matches!(
            "12a".parse::<Uint128>(),
            Err(CodecError::Parse(ParseError::InvalidInteger(_)))
        ));
    }

    #[test]
    fn test_json_string_or_number() {
        let v = Uint128(123_456_789_012_345_678_901_234_567_890);
        assert_eq!(
            serde_json::to_string(&v).unwrap(),
            "\"123456789012345678901234567890\""
        );
        let from_str: Uint128 = serde_json::from_str("\"123456789012345678901234567890\"").unwrap();
        assert_eq!(from_str, v);
        let from_num: Uint128 = serde_json::from_str("42").unwrap();
        assert_eq!(from_num, Uint128(42));
        assert!(serde_json::from_str::<Uint128>("-5").is_err());
    }
}
