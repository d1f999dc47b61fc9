//! Move type tags and their canonical text and byte forms.
//!
//! Supports:
//! - Primitive types: `bool`, `u8`, `u64`, `u128`, `address`, `signer`
//! - Vector types: `vector<T>`
//! - Struct types: `0x1::module::Struct` or `0x1::module::Struct<T1, T2>`
//!
//! Whitespace is insignificant anywhere in the text form. Printing always
//! produces the canonical form: full-length addresses and `,` with no spaces
//! between generic arguments, so `format(parse(s)) == s` for canonical `s`.
//!
//! # Examples
//!
//! ```
//! use move_txn_types::TypeTag;
//!
//! let tag: TypeTag = "vector<0x1::coin::Coin<u8>>".parse().unwrap();
//! assert_eq!(
//!     tag.to_string(),
//!     "vector<0x0000000000000000000000000000000000000000000000000000000000000001::coin::Coin<u8>>"
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::address::Address;
use crate::codec::{self, CanonicalDeserialize, CanonicalSerialize};
use crate::error::{CodecError, ParseError};
use crate::identifier::Identifier;
use crate::module_tag::{split_path, ModuleTag};
use crate::wire::{StructTagWire, TypeTagWire};

/// Maximum nesting accepted when parsing, encoding or decoding a type tag.
///
/// Measured by [`TypeTag::nesting_depth`].
pub const MAX_TYPE_TAG_NESTING: usize = 8;

/// The shape of a Move value.
///
/// Variant order is the canonical discriminant (0 through 7).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    Bool,
    U8,
    U64,
    U128,
    Address,
    Signer,
    Vector(Box<TypeTag>),
    Struct(Box<StructTag>),
}

/// A named, possibly generic, struct type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructTag {
    pub address: Address,
    pub module: Identifier,
    pub name: Identifier,
    pub type_params: Vec<TypeTag>,
}

impl TypeTag {
    /// Canonical discriminant byte.
    pub fn discriminant(&self) -> u8 {
        match self {
            TypeTag::Bool => 0,
            TypeTag::U8 => 1,
            TypeTag::U64 => 2,
            TypeTag::U128 => 3,
            TypeTag::Address => 4,
            TypeTag::Signer => 5,
            TypeTag::Vector(_) => 6,
            TypeTag::Struct(_) => 7,
        }
    }

    pub fn vector(element: TypeTag) -> Self {
        TypeTag::Vector(Box::new(element))
    }

    /// `vector<u8>`
    pub fn is_byte_vector(&self) -> bool {
        matches!(self, TypeTag::Vector(inner) if **inner == TypeTag::U8)
    }

    /// Number of enclosing `vector<..>` or `S<..>` levels around the deepest leaf.
    ///
    /// Primitives and non-generic structs are 0, `vector<u8>` is 1.
    pub fn nesting_depth(&self) -> usize {
        match self {
            TypeTag::Vector(inner) => 1 + inner.nesting_depth(),
            TypeTag::Struct(tag) => tag.nesting_depth(),
            _ => 0,
        }
    }
}

impl StructTag {
    pub fn new(
        address: Address,
        module: &str,
        name: &str,
        type_params: Vec<TypeTag>,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            address,
            module: Identifier::new(module)?,
            name: Identifier::new(name)?,
            type_params,
        })
    }

    /// See [`TypeTag::nesting_depth`].
    pub fn nesting_depth(&self) -> usize {
        self.type_params
            .iter()
            .map(|param| 1 + param.nesting_depth())
            .max()
            .unwrap_or(0)
    }

    pub fn module_tag(&self) -> ModuleTag {
        ModuleTag {
            address: self.address,
            name: self.module.clone(),
        }
    }
}

impl From<StructTag> for TypeTag {
    fn from(tag: StructTag) -> Self {
        TypeTag::Struct(Box::new(tag))
    }
}

// =============================================================================
// Text form
// =============================================================================

/// Parse a Move type string into a [`TypeTag`].
///
/// Input nesting deeper than [`MAX_TYPE_TAG_NESTING`] is rejected before the
/// inner levels are parsed.
pub fn parse_type_tag(type_str: &str) -> Result<TypeTag, ParseError> {
    let compact: String = type_str.chars().filter(|c| !c.is_whitespace()).collect();
    parse_compact(&compact, 0)
}

/// Parse a Move struct type string into a [`StructTag`].
pub fn parse_struct_tag(type_str: &str) -> Result<StructTag, ParseError> {
    let compact: String = type_str.chars().filter(|c| !c.is_whitespace()).collect();
    parse_struct(&compact, 0)
}

/// `depth` counts the generic levels already entered.
fn parse_compact(s: &str, depth: usize) -> Result<TypeTag, ParseError> {
    if depth > MAX_TYPE_TAG_NESTING {
        return Err(ParseError::NestingTooDeep(MAX_TYPE_TAG_NESTING));
    }
    match s {
        "bool" => return Ok(TypeTag::Bool),
        "u8" => return Ok(TypeTag::U8),
        "u64" => return Ok(TypeTag::U64),
        "u128" => return Ok(TypeTag::U128),
        "address" => return Ok(TypeTag::Address),
        "signer" => return Ok(TypeTag::Signer),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("vector<") {
        let inner = rest
            .strip_suffix('>')
            .ok_or_else(|| ParseError::UnbalancedBrackets(s.to_string()))?;
        let mut params = split_type_params(inner)?;
        return match (params.pop(), params.is_empty()) {
            (Some(element), true) => Ok(TypeTag::vector(parse_compact(element, depth + 1)?)),
            _ => Err(ParseError::SegmentCount {
                input: s.to_string(),
                expected: 1,
                found: params.len() + 1,
            }),
        };
    }

    parse_struct(s, depth).map(TypeTag::from)
}

fn parse_struct(s: &str, depth: usize) -> Result<StructTag, ParseError> {
    let (base, generics) = split_generics(s)?;

    let [address, module, name] = split_path::<3>(base)?;
    let address = Address::from_hex_literal(address)?;
    let module = Identifier::new(module)?;
    let name = Identifier::new(name)?;

    let type_params = match generics {
        Some(inner) => split_type_params(inner)?
            .into_iter()
            .map(|param| parse_compact(param, depth + 1))
            .collect::<Result<Vec<_>, _>>()?,
        None => vec![],
    };

    Ok(StructTag {
        address,
        module,
        name,
        type_params,
    })
}

/// Split `Base<...>` into the base path and the text between the outer brackets.
///
/// The first `<` must be matched by the final `>`.
fn split_generics(s: &str) -> Result<(&str, Option<&str>), ParseError> {
    let unbalanced = || ParseError::UnbalancedBrackets(s.to_string());

    let Some(open) = s.find('<') else {
        if s.contains('>') {
            return Err(unbalanced());
        }
        return Ok((s, None));
    };

    let mut depth = 0usize;
    for (i, c) in s.char_indices().skip_while(|(i, _)| *i < open) {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth.checked_sub(1).ok_or_else(unbalanced)?;
                if depth == 0 && i != s.len() - 1 {
                    return Err(unbalanced());
                }
            }
            _ => {}
        }
    }
    if depth != 0 || s[..open].contains('>') {
        return Err(unbalanced());
    }

    Ok((&s[..open], Some(&s[open + 1..s.len() - 1])))
}

/// Split type parameters respecting nested angle brackets.
///
/// Given `"A,B<C,D>,E"`, returns `["A", "B<C,D>", "E"]`. Commas only split at
/// depth zero; empty slots are rejected.
pub fn split_type_params(s: &str) -> Result<Vec<&str>, ParseError> {
    let mut result = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ParseError::UnbalancedBrackets(s.to_string()))?;
            }
            ',' if depth == 0 => {
                result.push(non_empty(&s[start..i], s)?);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(ParseError::UnbalancedBrackets(s.to_string()));
    }
    result.push(non_empty(&s[start..], s)?);

    Ok(result)
}

fn non_empty<'a>(param: &'a str, whole: &str) -> Result<&'a str, ParseError> {
    let param = param.trim();
    if param.is_empty() {
        Err(ParseError::EmptyTypeArgument(whole.to_string()))
    } else {
        Ok(param)
    }
}

impl FromStr for TypeTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type_tag(s)
    }
}

impl FromStr for StructTag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_struct_tag(s)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Bool => f.write_str("bool"),
            TypeTag::U8 => f.write_str("u8"),
            TypeTag::U64 => f.write_str("u64"),
            TypeTag::U128 => f.write_str("u128"),
            TypeTag::Address => f.write_str("address"),
            TypeTag::Signer => f.write_str("signer"),
            TypeTag::Vector(inner) => write!(f, "vector<{inner}>"),
            TypeTag::Struct(tag) => tag.fmt(f),
        }
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address, self.module, self.name)?;
        if let Some((first, rest)) = self.type_params.split_first() {
            write!(f, "<{first}")?;
            for param in rest {
                write!(f, ",{param}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

// =============================================================================
// Canonical bytes
// =============================================================================

impl CanonicalSerialize for TypeTag {
    fn to_bcs_bytes(&self) -> Result<Vec<u8>, CodecError> {
        codec::to_bytes(&TypeTagWire::try_from(self)?)
    }
}

impl CanonicalSerialize for StructTag {
    fn to_bcs_bytes(&self) -> Result<Vec<u8>, CodecError> {
        codec::to_bytes(&StructTagWire::try_from(self)?)
    }
}

impl CanonicalDeserialize for TypeTag {
    fn from_bcs_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        TypeTag::try_from(codec::from_bytes::<TypeTagWire>(bytes)?)
    }
}

impl CanonicalDeserialize for StructTag {
    fn from_bcs_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        StructTag::try_from(codec::from_bytes::<StructTagWire>(bytes)?)
    }
}

// =============================================================================
// JSON
// =============================================================================

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_type_tag(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for StructTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StructTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_struct_tag(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";

    #[test]
    fn test_parse_primitives() {
        assert_eq!(parse_type_tag("bool").unwrap(), TypeTag::Bool);
        assert_eq!(parse_type_tag("u8").unwrap(), TypeTag::U8);
        assert_eq!(parse_type_tag("u64").unwrap(), TypeTag::U64);
        assert_eq!(parse_type_tag("u128").unwrap(), TypeTag::U128);
        assert_eq!(parse_type_tag("address").unwrap(), TypeTag::Address);
        assert_eq!(parse_type_tag("signer").unwrap(), TypeTag::Signer);
    }

    #[test]
    fn test_parse_vector() {
        let tag = parse_type_tag("vector<u8>").unwrap();
        assert!(tag.is_byte_vector());
        assert_eq!(tag.to_bcs_bytes().unwrap(), vec![0x06, 0x01]);
    }

    #[test]
    fn test_primitive_bytes() {
        assert_eq!(TypeTag::Bool.to_bcs_bytes().unwrap(), vec![0x00]);
        assert_eq!(TypeTag::U8.to_bcs_bytes().unwrap(), vec![0x01]);
        assert_eq!(TypeTag::Signer.to_bcs_bytes().unwrap(), vec![0x05]);
    }

    #[test]
    fn test_parse_nested_struct() {
        let tag =
            parse_type_tag("vector<0x1::coin::CoinInfo<vector<u8>, 0x1::coin::Coin, u128>>")
                .unwrap();
        let TypeTag::Vector(inner) = &tag else {
            panic!("Expected vector type");
        };
        let TypeTag::Struct(info) = inner.as_ref() else {
            panic!("Expected struct type");
        };
        assert_eq!(info.address, Address::ONE);
        assert_eq!(info.module.as_str(), "coin");
        assert_eq!(info.name.as_str(), "CoinInfo");
        assert_eq!(
            info.type_params,
            vec![
                TypeTag::vector(TypeTag::U8),
                StructTag::new(Address::ONE, "coin", "Coin", vec![])
                    .unwrap()
                    .into(),
                TypeTag::U128,
            ]
        );
        assert_eq!(
            tag.to_string(),
            format!("vector<{ONE}::coin::CoinInfo<vector<u8>,{ONE}::coin::Coin,u128>>")
        );
    }

    #[test]
    fn test_whitespace_is_insignificant() {
        let canonical = format!("{ONE}::pool::Pool<{ONE}::a::A,vector<u64>>");
        let spaced = format!(" {ONE} :: pool ::Pool <\n{ONE}::a::A ,\tvector< u64 > > ");
        assert_eq!(
            parse_type_tag(&spaced).unwrap(),
            parse_type_tag(&canonical).unwrap()
        );
        assert_eq!(parse_type_tag(&spaced).unwrap().to_string(), canonical);
    }

    #[test]
    fn test_struct_bytes() {
        let tag: TypeTag = "0x8b7311d78d47e37d09435b8dc37c14afd977c5cfa74f974d45f0258d986eef53::fake_coin::USDC"
            .parse()
            .unwrap();
        assert_eq!(
            hex::encode(tag.to_bcs_bytes().unwrap()),
            "078b7311d78d47e37d09435b8dc37c14afd977c5cfa74f974d45f0258d986eef530966616b655f636f696e045553444300"
        );
        assert_eq!(TypeTag::from_bcs_bytes(&tag.to_bcs_bytes().unwrap()).unwrap(), tag);
    }

    #[test]
    fn test_unbalanced_brackets() {
        for input in [
            "vector<u8",
            "0x1::coin::Coin<u8",
            "0x1::coin::Coin<u8>>",
            "0x1::coin::Coin>u8<",
            "0x1::coin::Coin<u8>x",
            "0x1::coin::Coin<vector<u8>",
        ] {
            assert!(
                matches!(parse_type_tag(input), Err(ParseError::UnbalancedBrackets(_))),
                "{input} should be unbalanced, got {:?}",
                parse_type_tag(input)
            );
        }
    }

    #[test]
    fn test_segment_count() {
        assert!(matches!(
            parse_type_tag("0x1::coin"),
            Err(ParseError::SegmentCount { found: 2, .. })
        ));
        assert!(matches!(
            parse_type_tag("0x1::coin::Coin::Extra"),
            Err(ParseError::SegmentCount { found: 4, .. })
        ));
        assert!(matches!(
            parse_type_tag("vector<u8,u64>"),
            Err(ParseError::SegmentCount { expected: 1, found: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_address_and_identifier() {
        assert_eq!(
            parse_type_tag("0xzz::coin::Coin"),
            Err(ParseError::InvalidAddress("0xzz".to_string()))
        );
        assert_eq!(
            parse_type_tag("0x1::9coin::Coin"),
            Err(ParseError::InvalidIdentifier("9coin".to_string()))
        );
        assert!(matches!(
            parse_type_tag("u16"),
            Err(ParseError::SegmentCount { .. })
        ));
    }

    #[test]
    fn test_empty_type_argument() {
        assert!(matches!(
            parse_type_tag("0x1::coin::Coin<>"),
            Err(ParseError::EmptyTypeArgument(_))
        ));
        assert!(matches!(
            parse_type_tag("0x1::coin::Coin<u8,>"),
            Err(ParseError::EmptyTypeArgument(_))
        ));
    }

    #[test]
    fn test_split_type_params() {
        let params = split_type_params("u64,0x2::coin::Coin<0x2::fake_coin::ETH,u8>,bool").unwrap();
        assert_eq!(params, vec!["u64", "0x2::coin::Coin<0x2::fake_coin::ETH,u8>", "bool"]);
    }

    #[test]
    fn test_decode_rejects_unknown_discriminant() {
        assert!(matches!(
            TypeTag::from_bcs_bytes(&[0x08]),
            Err(CodecError::UnsupportedVariant(_))
        ));
    }

    #[test]
    fn test_decode_nesting_limit() {
        let mut bytes = vec![0x06; MAX_TYPE_TAG_NESTING + 2];
        bytes.push(0x01);
        assert_eq!(
            TypeTag::from_bcs_bytes(&bytes),
            Err(CodecError::NestingTooDeep(MAX_TYPE_TAG_NESTING))
        );
    }

    #[test]
    fn test_decode_very_deep_bytes_fail_cleanly() {
        let mut bytes = vec![0x06; 100_000];
        bytes.push(0x01);
        assert_eq!(
            TypeTag::from_bcs_bytes(&bytes),
            Err(CodecError::NestingTooDeep(MAX_TYPE_TAG_NESTING))
        );
    }

    fn nested_vector(levels: usize) -> String {
        format!("{}u8{}", "vector<".repeat(levels), ">".repeat(levels))
    }

    #[test]
    fn test_nesting_depth() {
        assert_eq!(TypeTag::U8.nesting_depth(), 0);
        assert_eq!(parse_type_tag("vector<u8>").unwrap().nesting_depth(), 1);
        assert_eq!(parse_type_tag("0x1::coin::Coin").unwrap().nesting_depth(), 0);
        assert_eq!(
            parse_type_tag("0x1::coin::Coin<vector<u8>, u64>")
                .unwrap()
                .nesting_depth(),
            2
        );
    }

    #[test]
    fn test_parse_max_nesting_round_trips() {
        let tag = parse_type_tag(&nested_vector(MAX_TYPE_TAG_NESTING)).unwrap();
        assert_eq!(tag.nesting_depth(), MAX_TYPE_TAG_NESTING);
        let bytes = tag.to_bcs_bytes().unwrap();
        assert_eq!(TypeTag::from_bcs_bytes(&bytes).unwrap(), tag);
    }

    #[test]
    fn test_parse_rejects_one_level_too_deep() {
        assert_eq!(
            parse_type_tag(&nested_vector(MAX_TYPE_TAG_NESTING + 1)),
            Err(ParseError::NestingTooDeep(MAX_TYPE_TAG_NESTING))
        );
        let generic = format!("0x1::m::S<{}>", nested_vector(MAX_TYPE_TAG_NESTING));
        assert_eq!(
            parse_struct_tag(&generic),
            Err(ParseError::NestingTooDeep(MAX_TYPE_TAG_NESTING))
        );
    }

    #[test]
    fn test_parse_very_deep_input_fails_cleanly() {
        let deep = nested_vector(200_000);
        assert_eq!(
            parse_type_tag(&deep),
            Err(ParseError::NestingTooDeep(MAX_TYPE_TAG_NESTING))
        );
        let deep_struct = format!("{}u8{}", "0x1::m::S<".repeat(200_000), ">".repeat(200_000));
        assert_eq!(
            parse_type_tag(&deep_struct),
            Err(ParseError::NestingTooDeep(MAX_TYPE_TAG_NESTING))
        );
    }

    #[test]
    fn test_encode_rejects_too_deep_tag() {
        let mut tag = TypeTag::U8;
        for _ in 0..=MAX_TYPE_TAG_NESTING {
            tag = TypeTag::vector(tag);
        }
        assert_eq!(
            tag.to_bcs_bytes(),
            Err(CodecError::NestingTooDeep(MAX_TYPE_TAG_NESTING))
        );
    }
}
