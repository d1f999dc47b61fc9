//! Canonical wire shapes.
//!
//! The public types serialize to JSON strings and objects, so the field order
//! and discriminants that `bcs` writes are declared on these private mirrors.
//! Converting into a mirror validates nothing; converting out of one checks
//! identifiers and type-tag nesting.

use serde::{Deserialize, Deserializer, Serialize};

use crate::address::{Address, ADDRESS_LENGTH};
use crate::error::CodecError;
use crate::identifier::Identifier;
use crate::module_tag::{FunctionTag, ModuleTag};
use crate::payload::{DecodedEntryFunction, EntryFunctionPayload};
use crate::transaction::{DecodedTransaction, Transaction};
use crate::type_tag::{StructTag, TypeTag, MAX_TYPE_TAG_NESTING};

/// Variant order is the canonical discriminant (0 through 7).
#[derive(Serialize, Deserialize)]
pub(crate) enum TypeTagWire {
    Bool,
    U8,
    U64,
    U128,
    Address,
    Signer,
    Vector(Box<TypeTagWire>),
    Struct(Box<StructTagWire>),
}

#[derive(Serialize, Deserialize)]
pub(crate) struct StructTagWire {
    address: [u8; ADDRESS_LENGTH],
    module: String,
    name: String,
    type_params: Vec<TypeTagWire>,
}

#[derive(Serialize, Deserialize)]
pub(crate) struct ModuleTagWire {
    address: [u8; ADDRESS_LENGTH],
    name: String,
}

#[derive(Serialize, Deserialize)]
pub(crate) struct FunctionTagWire {
    module: ModuleTagWire,
    name: String,
}

/// Arguments stay as their per-value bytes; `bcs` adds the outer length prefix.
#[derive(Serialize, Deserialize)]
pub(crate) struct EntryFunctionWire {
    function: FunctionTagWire,
    ty_args: Vec<TypeTagWire>,
    args: Vec<Vec<u8>>,
}

/// Only entry functions are decoded; the other kinds hold their discriminants.
#[derive(Serialize, Deserialize)]
pub(crate) enum PayloadWire {
    #[serde(deserialize_with = "reject_script")]
    Script(()),
    #[serde(deserialize_with = "reject_module_bundle")]
    ModuleBundle(()),
    EntryFunction(EntryFunctionWire),
}

#[derive(Serialize, Deserialize)]
pub(crate) struct RawTransactionWire {
    sender: [u8; ADDRESS_LENGTH],
    sequence_number: u64,
    payload: PayloadWire,
    max_gas_amount: u64,
    gas_unit_price: u64,
    expiration_timestamp_secs: u64,
    chain_id: u8,
}

fn reject_script<'de, D: Deserializer<'de>>(_: D) -> Result<(), D::Error> {
    Err(serde::de::Error::custom("script payload"))
}

fn reject_module_bundle<'de, D: Deserializer<'de>>(_: D) -> Result<(), D::Error> {
    Err(serde::de::Error::custom("module bundle payload"))
}

// =============================================================================
// Into the wire
// =============================================================================

impl TryFrom<&TypeTag> for TypeTagWire {
    type Error = CodecError;

    fn try_from(tag: &TypeTag) -> Result<Self, CodecError> {
        check_nesting(tag)?;
        Ok(type_tag_wire(tag))
    }
}

impl TryFrom<&StructTag> for StructTagWire {
    type Error = CodecError;

    fn try_from(tag: &StructTag) -> Result<Self, CodecError> {
        if tag.nesting_depth() > MAX_TYPE_TAG_NESTING {
            return Err(CodecError::NestingTooDeep(MAX_TYPE_TAG_NESTING));
        }
        Ok(struct_tag_wire(tag))
    }
}

fn type_tag_wire(tag: &TypeTag) -> TypeTagWire {
    match tag {
        TypeTag::Bool => TypeTagWire::Bool,
        TypeTag::U8 => TypeTagWire::U8,
        TypeTag::U64 => TypeTagWire::U64,
        TypeTag::U128 => TypeTagWire::U128,
        TypeTag::Address => TypeTagWire::Address,
        TypeTag::Signer => TypeTagWire::Signer,
        TypeTag::Vector(inner) => TypeTagWire::Vector(Box::new(type_tag_wire(inner))),
        TypeTag::Struct(s) => TypeTagWire::Struct(Box::new(struct_tag_wire(s))),
    }
}

fn struct_tag_wire(tag: &StructTag) -> StructTagWire {
    StructTagWire {
        address: *tag.address.as_bytes(),
        module: tag.module.to_string(),
        name: tag.name.to_string(),
        type_params: tag.type_params.iter().map(type_tag_wire).collect(),
    }
}

impl From<&ModuleTag> for ModuleTagWire {
    fn from(tag: &ModuleTag) -> Self {
        ModuleTagWire {
            address: *tag.address.as_bytes(),
            name: tag.name.to_string(),
        }
    }
}

impl From<&FunctionTag> for FunctionTagWire {
    fn from(tag: &FunctionTag) -> Self {
        FunctionTagWire {
            module: ModuleTagWire::from(&tag.module),
            name: tag.name.to_string(),
        }
    }
}

impl TryFrom<&EntryFunctionPayload> for EntryFunctionWire {
    type Error = CodecError;

    fn try_from(payload: &EntryFunctionPayload) -> Result<Self, CodecError> {
        Ok(EntryFunctionWire {
            function: FunctionTagWire::from(&payload.function),
            ty_args: payload
                .type_arguments
                .iter()
                .map(TypeTagWire::try_from)
                .collect::<Result<_, _>>()?,
            args: payload
                .arguments
                .iter()
                .map(|arg| arg.encode())
                .collect::<Result<_, _>>()?,
        })
    }
}

impl TryFrom<&Transaction> for RawTransactionWire {
    type Error = CodecError;

    fn try_from(tx: &Transaction) -> Result<Self, CodecError> {
        Ok(RawTransactionWire {
            sender: *tx.sender.as_bytes(),
            sequence_number: tx.sequence_number,
            payload: PayloadWire::EntryFunction(EntryFunctionWire::try_from(
                tx.entry_function(),
            )?),
            max_gas_amount: tx.max_gas_amount,
            gas_unit_price: tx.gas_unit_price,
            expiration_timestamp_secs: tx.expiration_timestamp_secs,
            chain_id: tx.chain_id,
        })
    }
}

// =============================================================================
// Out of the wire
// =============================================================================

fn check_nesting(tag: &TypeTag) -> Result<(), CodecError> {
    if tag.nesting_depth() > MAX_TYPE_TAG_NESTING {
        return Err(CodecError::NestingTooDeep(MAX_TYPE_TAG_NESTING));
    }
    Ok(())
}

fn type_tag_from_wire(wire: TypeTagWire) -> Result<TypeTag, CodecError> {
    Ok(match wire {
        TypeTagWire::Bool => TypeTag::Bool,
        TypeTagWire::U8 => TypeTag::U8,
        TypeTagWire::U64 => TypeTag::U64,
        TypeTagWire::U128 => TypeTag::U128,
        TypeTagWire::Address => TypeTag::Address,
        TypeTagWire::Signer => TypeTag::Signer,
        TypeTagWire::Vector(inner) => TypeTag::vector(type_tag_from_wire(*inner)?),
        TypeTagWire::Struct(s) => TypeTag::from(struct_tag_from_wire(*s)?),
    })
}

fn struct_tag_from_wire(wire: StructTagWire) -> Result<StructTag, CodecError> {
    Ok(StructTag {
        address: Address::new(wire.address),
        module: Identifier::new(wire.module)?,
        name: Identifier::new(wire.name)?,
        type_params: wire
            .type_params
            .into_iter()
            .map(type_tag_from_wire)
            .collect::<Result<_, _>>()?,
    })
}

impl TryFrom<TypeTagWire> for TypeTag {
    type Error = CodecError;

    fn try_from(wire: TypeTagWire) -> Result<Self, CodecError> {
        let tag = type_tag_from_wire(wire)?;
        check_nesting(&tag)?;
        Ok(tag)
    }
}

impl TryFrom<StructTagWire> for StructTag {
    type Error = CodecError;

    fn try_from(wire: StructTagWire) -> Result<Self, CodecError> {
        let tag = struct_tag_from_wire(wire)?;
        if tag.nesting_depth() > MAX_TYPE_TAG_NESTING {
            return Err(CodecError::NestingTooDeep(MAX_TYPE_TAG_NESTING));
        }
        Ok(tag)
    }
}

impl TryFrom<ModuleTagWire> for ModuleTag {
    type Error = CodecError;

    fn try_from(wire: ModuleTagWire) -> Result<Self, CodecError> {
        Ok(ModuleTag {
            address: Address::new(wire.address),
            name: Identifier::new(wire.name)?,
        })
    }
}

impl TryFrom<FunctionTagWire> for FunctionTag {
    type Error = CodecError;

    fn try_from(wire: FunctionTagWire) -> Result<Self, CodecError> {
        Ok(FunctionTag {
            module: ModuleTag::try_from(wire.module)?,
            name: Identifier::new(wire.name)?,
        })
    }
}

impl TryFrom<EntryFunctionWire> for DecodedEntryFunction {
    type Error = CodecError;

    fn try_from(wire: EntryFunctionWire) -> Result<Self, CodecError> {
        Ok(DecodedEntryFunction {
            function: FunctionTag::try_from(wire.function)?,
            type_arguments: wire
                .ty_args
                .into_iter()
                .map(TypeTag::try_from)
                .collect::<Result<_, _>>()?,
            arguments: wire.args,
        })
    }
}

impl TryFrom<PayloadWire> for DecodedEntryFunction {
    type Error = CodecError;

    fn try_from(wire: PayloadWire) -> Result<Self, CodecError> {
        match wire {
            PayloadWire::EntryFunction(entry) => DecodedEntryFunction::try_from(entry),
            PayloadWire::Script(()) => Err(CodecError::UnsupportedVariant("script payload".into())),
            PayloadWire::ModuleBundle(()) => Err(CodecError::UnsupportedVariant(
                "module bundle payload".into(),
            )),
        }
    }
}

impl TryFrom<RawTransactionWire> for DecodedTransaction {
    type Error = CodecError;

    fn try_from(wire: RawTransactionWire) -> Result<Self, CodecError> {
        Ok(DecodedTransaction {
            sender: Address::new(wire.sender),
            sequence_number: wire.sequence_number,
            payload: DecodedEntryFunction::try_from(wire.payload)?,
            max_gas_amount: wire.max_gas_amount,
            gas_unit_price: wire.gas_unit_price,
            expiration_timestamp_secs: wire.expiration_timestamp_secs,
            chain_id: wire.chain_id,
        })
    }
}
