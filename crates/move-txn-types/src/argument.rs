//! Entry-function argument values.
//!
//! An argument list has no common element type, so each [`ArgumentValue`] is
//! encoded by its own rule first and the result is then written into the list
//! as a length-prefixed byte string ("double encoding"). Consumers can skip an
//! argument without knowing its type.
//!
//! Arguments read back from JSON carry no type information and are recovered
//! by an ordered heuristic (see [`ArgumentValue::from_json`]). The heuristic is
//! lossy: `vector<u8>` text that looks like an address becomes an address, and
//! any integer becomes a `u64`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::address::Address;
use crate::codec::{self, CanonicalDeserialize, CanonicalSerialize};
use crate::encoding::{parse_hex_bytes, to_hex_literal};
use crate::error::{CodecError, ParseError};
use crate::json::parse_u64;
use crate::type_tag::TypeTag;
use crate::uint128::Uint128;

/// One argument to an entry function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgumentValue {
    Bool(bool),
    U8(u8),
    U64(u64),
    U128(Uint128),
    Address(Address),
    /// `vector<u8>`, including UTF-8 strings.
    Bytes(Vec<u8>),
}

impl ArgumentValue {
    /// Per-variant canonical bytes (before the outer length prefix).
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        match self {
            ArgumentValue::Bool(v) => codec::to_bytes(v),
            ArgumentValue::U8(v) => codec::to_bytes(v),
            ArgumentValue::U64(v) => codec::to_bytes(v),
            ArgumentValue::U128(v) => v.to_bcs_bytes(),
            ArgumentValue::Address(v) => v.to_bcs_bytes(),
            ArgumentValue::Bytes(v) => codec::to_bytes(v),
        }
    }

    /// The double-encoded form: `uleb128(len(encode())) || encode()`.
    pub fn encode_prefixed(&self) -> Result<Vec<u8>, CodecError> {
        codec::to_bytes(&self.encode()?)
    }

    /// The Move type this value encodes as.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            ArgumentValue::Bool(_) => TypeTag::Bool,
            ArgumentValue::U8(_) => TypeTag::U8,
            ArgumentValue::U64(_) => TypeTag::U64,
            ArgumentValue::U128(_) => TypeTag::U128,
            ArgumentValue::Address(_) => TypeTag::Address,
            ArgumentValue::Bytes(_) => TypeTag::vector(TypeTag::U8),
        }
    }

    /// Decode per-variant bytes, given the parameter type.
    ///
    /// `bytes` must be exactly one value (the inner encoding, without the outer
    /// length prefix). Types other than the six argument kinds are rejected.
    pub fn decode_as(tag: &TypeTag, bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(match tag {
            TypeTag::Bool => ArgumentValue::Bool(codec::from_bytes(bytes)?),
            TypeTag::U8 => ArgumentValue::U8(codec::from_bytes(bytes)?),
            TypeTag::U64 => ArgumentValue::U64(codec::from_bytes(bytes)?),
            TypeTag::U128 => ArgumentValue::U128(Uint128::from_bcs_bytes(bytes)?),
            TypeTag::Address => ArgumentValue::Address(Address::from_bcs_bytes(bytes)?),
            t if t.is_byte_vector() => ArgumentValue::Bytes(codec::from_bytes(bytes)?),
            other => {
                return Err(CodecError::UnsupportedVariant(format!(
                    "argument of type {other}"
                )))
            }
        })
    }

    /// Recover a value from untyped JSON.
    ///
    /// Tried in order:
    /// 1. unsigned integer, as a decimal string or a JSON number → `U64`
    /// 2. boolean → `Bool`
    /// 3. `0x`-prefixed string that parses as an address → `Address`
    /// 4. any other string → `Bytes` (its UTF-8 bytes)
    ///
    /// Any other JSON shape is rejected.
    pub fn from_json(value: &Value) -> Result<Self, CodecError> {
        match value {
            Value::Number(n) => n.as_u64().map(ArgumentValue::U64).ok_or_else(|| {
                CodecError::Overflow {
                    target: "u64",
                    detail: n.to_string(),
                }
            }),
            Value::String(s) => {
                if let Some(v) = parse_u64(s) {
                    return Ok(ArgumentValue::U64(v));
                }
                if s.starts_with("0x") {
                    if let Ok(addr) = Address::from_hex_literal(s) {
                        return Ok(ArgumentValue::Address(addr));
                    }
                }
                Ok(ArgumentValue::Bytes(s.as_bytes().to_vec()))
            }
            Value::Bool(b) => Ok(ArgumentValue::Bool(*b)),
            other => Err(CodecError::UnsupportedVariant(format!(
                "json argument {other}"
            ))),
        }
    }

    /// JSON form used by the REST service.
    ///
    /// `u64` and `u128` are decimal strings; byte vectors are their UTF-8 text
    /// when valid, otherwise `0x` hex.
    pub fn to_json(&self) -> Value {
        match self {
            ArgumentValue::Bool(v) => Value::Bool(*v),
            ArgumentValue::U8(v) => Value::from(*v),
            ArgumentValue::U64(v) => Value::String(v.to_string()),
            ArgumentValue::U128(v) => Value::String(v.to_string()),
            ArgumentValue::Address(v) => Value::String(v.to_hex_literal()),
            ArgumentValue::Bytes(v) => match std::str::from_utf8(v) {
                Ok(s) => Value::String(s.to_string()),
                Err(_) => Value::String(to_hex_literal(v)),
            },
        }
    }
}

// =============================================================================
// Text parsing
// =============================================================================

/// Parse a value with an explicit type prefix.
///
/// Supported types: u8, u64, u128, bool, address, string (or utf8), hex
pub fn parse_typed_argument(type_prefix: &str, value: &str) -> Result<ArgumentValue, CodecError> {
    let value = value.trim();
    let invalid = || ParseError::InvalidInteger(value.to_string());
    match type_prefix.trim() {
        "u8" => {
            let n = parse_u64(value).ok_or_else(invalid)?;
            u8::try_from(n)
                .map(ArgumentValue::U8)
                .map_err(|_| CodecError::Overflow {
                    target: "u8",
                    detail: value.to_string(),
                })
        }
        "u64" => {
            if let Some(n) = parse_u64(value) {
                return Ok(ArgumentValue::U64(n));
            }
            match Uint128::parse_decimal(value) {
                Ok(_) => Err(CodecError::Overflow {
                    target: "u64",
                    detail: value.to_string(),
                }),
                Err(_) => Err(invalid().into()),
            }
        }
        "u128" => Uint128::parse_decimal(value).map(ArgumentValue::U128),
        "bool" => match value {
            "true" => Ok(ArgumentValue::Bool(true)),
            "false" => Ok(ArgumentValue::Bool(false)),
            _ => Err(CodecError::UnsupportedVariant(format!("bool value '{value}'"))),
        },
        "address" => Ok(ArgumentValue::Address(Address::from_hex_literal(value)?)),
        "string" | "utf8" => Ok(ArgumentValue::Bytes(value.as_bytes().to_vec())),
        "hex" => Ok(ArgumentValue::Bytes(parse_hex_bytes(value)?)),
        other => Err(CodecError::UnsupportedVariant(format!(
            "argument type '{other}' (supported: u8, u64, u128, bool, address, string, hex)"
        ))),
    }
}

/// Parse a command-line argument.
///
/// `type:value` uses [`parse_typed_argument`]; anything else goes through the
/// same ordered inference as JSON input (`true`/`false` are booleans here).
pub fn parse_argument(arg: &str) -> Result<ArgumentValue, CodecError> {
    let arg = arg.trim();
    if let Some((type_prefix, value)) = arg.split_once(':') {
        if is_type_prefix(type_prefix) {
            return parse_typed_argument(type_prefix, value);
        }
    }
    match arg {
        "true" => Ok(ArgumentValue::Bool(true)),
        "false" => Ok(ArgumentValue::Bool(false)),
        _ => ArgumentValue::from_json(&Value::String(arg.to_string())),
    }
}

fn is_type_prefix(s: &str) -> bool {
    matches!(
        s,
        "u8" | "u64" | "u128" | "bool" | "address" | "string" | "utf8" | "hex"
    )
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for ArgumentValue {
    fn from(v: bool) -> Self {
        ArgumentValue::Bool(v)
    }
}

impl From<u8> for ArgumentValue {
    fn from(v: u8) -> Self {
        ArgumentValue::U8(v)
    }
}

impl From<u64> for ArgumentValue {
    fn from(v: u64) -> Self {
        ArgumentValue::U64(v)
    }
}

impl From<Uint128> for ArgumentValue {
    fn from(v: Uint128) -> Self {
        ArgumentValue::U128(v)
    }
}

impl From<Address> for ArgumentValue {
    fn from(v: Address) -> Self {
        ArgumentValue::Address(v)
    }
}

impl From<Vec<u8>> for ArgumentValue {
    fn from(v: Vec<u8>) -> Self {
        ArgumentValue::Bytes(v)
    }
}

impl From<&str> for ArgumentValue {
    fn from(v: &str) -> Self {
        ArgumentValue::Bytes(v.as_bytes().to_vec())
    }
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            Value::String(s) => f.write_str(&s),
            other => write!(f, "{other}"),
        }
    }
}

impl Serialize for ArgumentValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ArgumentValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ArgumentValue::from_json(&value).map_err(serde::de::Error::custom)
    }
}
