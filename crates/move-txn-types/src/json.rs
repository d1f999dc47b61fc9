//! JSON boundary helpers.
//!
//! The REST service transmits 64-bit integers as decimal strings. Readers accept
//! either a string or a plain JSON number.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Account {
//!     #[serde(with = "move_txn_types::json::u64_string")]
//!     sequence_number: u64,
//! }
//!
//! let a: Account = serde_json::from_str(r#"{"sequence_number":"42"}"#).unwrap();
//! assert_eq!(a.sequence_number, 42);
//! let b: Account = serde_json::from_str(r#"{"sequence_number":42}"#).unwrap();
//! assert_eq!(serde_json::to_string(&b).unwrap(), r#"{"sequence_number":"42"}"#);
//! ```

use std::fmt;

use serde::de::{self, Visitor};

/// `u64` as a decimal string, read from a string or a number.
pub mod u64_string {
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        deserializer.deserialize_any(super::U64Visitor)
    }
}

/// `Option<u64>` as an optional decimal string.
pub mod option_u64_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<u64>, D::Error> {
        #[derive(Deserialize)]
        struct Wrapped(#[serde(with = "super::u64_string")] u64);

        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(v)| v))
    }
}

/// Byte strings as `0x`-prefixed lowercase hex.
pub mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", hex::encode(value)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        crate::encoding::parse_hex_bytes(&s).map_err(serde::de::Error::custom)
    }
}

/// Parse a JSON-ish decimal `u64`, tolerating surrounding whitespace.
pub fn parse_u64(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

pub(crate) struct U64Visitor;

impl Visitor<'_> for U64Visitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an unsigned 64-bit integer as a decimal string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
        parse_u64(v).ok_or_else(|| E::custom(format!("invalid u64 string '{v}'")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        u64::try_from(v).map_err(|_| E::custom(format!("value {v} overflows u64")))
    }
}
