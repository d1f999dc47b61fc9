//! Module and entry-function identifiers.
//!
//! - [`ModuleTag`]: `address::module`
//! - [`FunctionTag`]: `address::module::function`
//!
//! Canonical bytes are the raw address, then each name as a length-prefixed string.
//! Whitespace is insignificant in the text form, as for type tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::address::Address;
use crate::codec::{self, CanonicalDeserialize, CanonicalSerialize};
use crate::error::{CodecError, ParseError};
use crate::identifier::Identifier;
use crate::wire::{FunctionTagWire, ModuleTagWire};

/// A module on chain, identified by its publishing address and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleTag {
    pub address: Address,
    pub name: Identifier,
}

impl ModuleTag {
    pub fn new(address: Address, name: &str) -> Result<Self, ParseError> {
        Ok(Self {
            address,
            name: Identifier::new(name)?,
        })
    }
}

/// An entry function, identified by its module and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionTag {
    pub module: ModuleTag,
    pub name: Identifier,
}

impl FunctionTag {
    pub fn new(address: Address, module: &str, name: &str) -> Result<Self, ParseError> {
        Ok(Self {
            module: ModuleTag::new(address, module)?,
            name: Identifier::new(name)?,
        })
    }
}

fn compact(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Split `s` on `::` and require exactly `N` segments.
pub(crate) fn split_path<const N: usize>(s: &str) -> Result<[&str; N], ParseError> {
    let parts: Vec<&str> = s.split("::").collect();
    parts.try_into().map_err(|parts: Vec<&str>| ParseError::SegmentCount {
        input: s.to_string(),
        expected: N,
        found: parts.len(),
    })
}

impl FromStr for ModuleTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = compact(s);
        let [address, module] = split_path::<2>(&s)?;
        ModuleTag::new(Address::from_hex_literal(address)?, module)
    }
}

impl FromStr for FunctionTag {
    type Err = ParseError;

    /// # Examples
    ///
    /// ```
    /// use move_txn_types::FunctionTag;
    ///
    /// let f: FunctionTag = "0x1::coin::transfer".parse().unwrap();
    /// assert_eq!(f.name.as_str(), "transfer");
    /// assert!("0x1::coin".parse::<FunctionTag>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = compact(s);
        let [address, module, name] = split_path::<3>(&s)?;
        FunctionTag::new(Address::from_hex_literal(address)?, module, name)
    }
}

impl fmt::Display for ModuleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.address, self.name)
    }
}

impl fmt::Display for FunctionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module, self.name)
    }
}

impl CanonicalSerialize for ModuleTag {
    fn to_bcs_bytes(&self) -> Result<Vec<u8>, CodecError> {
        codec::to_bytes(&ModuleTagWire::from(self))
    }
}

impl CanonicalDeserialize for ModuleTag {
    fn from_bcs_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        ModuleTag::try_from(codec::from_bytes::<ModuleTagWire>(bytes)?)
    }
}

impl CanonicalSerialize for FunctionTag {
    fn to_bcs_bytes(&self) -> Result<Vec<u8>, CodecError> {
        codec::to_bytes(&FunctionTagWire::from(self))
    }
}

impl CanonicalDeserialize for FunctionTag {
    fn from_bcs_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        FunctionTag::try_from(codec::from_bytes::<FunctionTagWire>(bytes)?)
    }
}

macro_rules! string_serde {
    ($t:ty) => {
        impl Serialize for $t {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

string_serde!(ModuleTag);
string_serde!(FunctionTag);

#[cfg(test)]
mod tests {
    use super::*;

    const FAKE_COIN: &str = "0x8b7311d78d47e37d09435b8dc37c14afd977c5cfa74f974d45f0258d986eef53";

    #[test]
    fn test_parse_function_tag() {
        let f: FunctionTag = format!("{FAKE_COIN}::fake_coin::mint").parse().unwrap();
        assert_eq!(f.module.name.as_str(), "fake_coin");
        assert_eq!(f.name.as_str(), "mint");
        assert_eq!(f.to_string(), format!("{FAKE_COIN}::fake_coin::mint"));
    }

    #[test]
    fn test_function_tag_bytes() {
        let f: FunctionTag = format!("{FAKE_COIN}::fake_coin::mint").parse().unwrap();
        let expected = format!("{}0966616b655f636f696e046d696e74", &FAKE_COIN[2..]);
        let bytes = f.to_bcs_bytes().unwrap();
        assert_eq!(hex::encode(&bytes), expected);
        assert_eq!(FunctionTag::from_bcs_bytes(&bytes).unwrap(), f);
    }

    #[test]
    fn test_whitespace_around_separators() {
        let spaced: FunctionTag = "0x1 :: coin :: transfer".parse().unwrap();
        assert_eq!(spaced, "0x1::coin::transfer".parse().unwrap());
        let module: ModuleTag = " 0x1 ::\tcoin ".parse().unwrap();
        assert_eq!(module, ModuleTag::new(Address::ONE, "coin").unwrap());
    }

    #[test]
    fn test_decode_rejects_bad_identifier() {
        // module name "9c" is not an identifier
        let mut bytes = Address::ONE.as_bytes().to_vec();
        bytes.extend_from_slice(&[0x02, b'9', b'c']);
        assert!(matches!(
            ModuleTag::from_bcs_bytes(&bytes),
            Err(CodecError::Parse(ParseError::InvalidIdentifier(_)))
        ));
    }

    #[test]
    fn test_module_tag_segment_count() {
        assert!(matches!(
            "0x1::coin::transfer".parse::<ModuleTag>(),
            Err(ParseError::SegmentCount { expected: 2, found: 3, .. })
        ));
        let m: ModuleTag = "0x1::coin".parse().unwrap();
        assert_eq!(m.address, Address::ONE);
    }

    #[test]
    fn test_function_tag_errors() {
        assert!(matches!(
            "0x1::coin".parse::<FunctionTag>(),
            Err(ParseError::SegmentCount { expected: 3, found: 2, .. })
        ));
        assert!(matches!(
            "0xzz::coin::transfer".parse::<FunctionTag>(),
            Err(ParseError::InvalidAddress(_))
        ));
        assert!(matches!(
            "0x1::coin::transfer<u8>".parse::<FunctionTag>(),
            Err(ParseError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_json_is_string() {
        let f: FunctionTag = "0x1::aptos_account::transfer".parse().unwrap();
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(
            json,
            serde_json::json!(
                "0x0000000000000000000000000000000000000000000000000000000000000001::aptos_account::transfer"
            )
        );
        let back: FunctionTag = serde_json::from_value(json).unwrap();
        assert_eq!(back, f);
    }
}
