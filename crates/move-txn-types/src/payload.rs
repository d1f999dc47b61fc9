//! Transaction payloads.
//!
//! Only entry-function calls are supported. The two other payload kinds
//! (script, module bundle) are recognised by discriminant and reported as
//! [`CodecError::UnsupportedVariant`].

use serde::{Deserialize, Serialize};

use crate::argument::ArgumentValue;
use crate::codec::{self, CanonicalDeserialize, CanonicalSerialize};
use crate::error::CodecError;
use crate::module_tag::FunctionTag;
use crate::type_tag::TypeTag;
use crate::wire::{EntryFunctionWire, PayloadWire};

/// Payload discriminant for a script.
pub const SCRIPT_PAYLOAD: u8 = 0;
/// Payload discriminant for a module bundle.
pub const MODULE_BUNDLE_PAYLOAD: u8 = 1;
/// Payload discriminant for an entry-function call.
pub const ENTRY_FUNCTION_PAYLOAD: u8 = 2;

/// A call to an entry function with its type arguments and arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryFunctionPayload {
    pub function: FunctionTag,
    pub type_arguments: Vec<TypeTag>,
    pub arguments: Vec<ArgumentValue>,
}

impl EntryFunctionPayload {
    pub fn new(
        function: FunctionTag,
        type_arguments: Vec<TypeTag>,
        arguments: Vec<ArgumentValue>,
    ) -> Self {
        Self {
            function,
            type_arguments,
            arguments,
        }
    }

    /// Canonical bytes including the entry-function discriminant.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        self.to_bcs_bytes()
    }
}

impl CanonicalSerialize for EntryFunctionPayload {
    fn to_bcs_bytes(&self) -> Result<Vec<u8>, CodecError> {
        codec::to_bytes(&PayloadWire::EntryFunction(EntryFunctionWire::try_from(
            self,
        )?))
    }
}

/// The payload of a transaction, tagged with its kind on the JSON boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransactionPayload {
    #[serde(rename = "entry_function_payload")]
    EntryFunction(EntryFunctionPayload),
}

impl TransactionPayload {
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        self.to_bcs_bytes()
    }

    pub fn as_entry_function(&self) -> &EntryFunctionPayload {
        match self {
            TransactionPayload::EntryFunction(p) => p,
        }
    }
}

impl From<EntryFunctionPayload> for TransactionPayload {
    fn from(p: EntryFunctionPayload) -> Self {
        TransactionPayload::EntryFunction(p)
    }
}

impl CanonicalSerialize for TransactionPayload {
    fn to_bcs_bytes(&self) -> Result<Vec<u8>, CodecError> {
        match self {
            TransactionPayload::EntryFunction(p) => p.to_bcs_bytes(),
        }
    }
}

/// An entry-function payload read back from canonical bytes.
///
/// Arguments are not self-describing, so they are kept as their inner byte
/// strings until the caller supplies parameter types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEntryFunction {
    pub function: FunctionTag,
    pub type_arguments: Vec<TypeTag>,
    pub arguments: Vec<Vec<u8>>,
}

impl DecodedEntryFunction {
    /// Recover typed arguments given the function's parameter types.
    pub fn typed_arguments(&self, params: &[TypeTag]) -> Result<Vec<ArgumentValue>, CodecError> {
        if params.len() != self.arguments.len() {
            return Err(CodecError::UnsupportedVariant(format!(
                "{} parameter types for {} arguments",
                params.len(),
                self.arguments.len()
            )));
        }
        params
            .iter()
            .zip(&self.arguments)
            .map(|(tag, raw)| ArgumentValue::decode_as(tag, raw))
            .collect()
    }

    /// Rebuild a payload once the arguments are typed.
    pub fn into_payload(self, params: &[TypeTag]) -> Result<EntryFunctionPayload, CodecError> {
        let arguments = self.typed_arguments(params)?;
        Ok(EntryFunctionPayload {
            function: self.function,
            type_arguments: self.type_arguments,
            arguments,
        })
    }
}

impl CanonicalDeserialize for DecodedEntryFunction {
    fn from_bcs_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        DecodedEntryFunction::try_from(codec::from_bytes::<PayloadWire>(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;

    fn transfer() -> EntryFunctionPayload {
        EntryFunctionPayload::new(
            "0x1::coin::transfer".parse().unwrap(),
            vec!["0x1::aptos_coin::AptosCoin".parse().unwrap()],
            vec![ArgumentValue::Address(Address::ONE), ArgumentValue::U64(500)],
        )
    }

    #[test]
    fn test_encode_layout() {
        let bytes = transfer().encode().unwrap();
        assert_eq!(bytes[0], ENTRY_FUNCTION_PAYLOAD);
        // function tag follows the discriminant
        assert_eq!(&bytes[1..33], Address::ONE.as_bytes());
        // last argument: len 8, then 500 little-endian
        assert_eq!(&bytes[bytes.len() - 9..], &[8, 0xf4, 0x01, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(transfer().encode().unwrap(), transfer().encode().unwrap());
        let payload = TransactionPayload::from(transfer());
        assert_eq!(payload.encode().unwrap(), transfer().encode().unwrap());
    }

    #[test]
    fn test_decode_and_retype() {
        let payload = transfer();
        let bytes = payload.encode().unwrap();
        let decoded = DecodedEntryFunction::from_bcs_bytes(&bytes).unwrap();
        assert_eq!(decoded.function, payload.function);
        assert_eq!(decoded.type_arguments, payload.type_arguments);
        assert_eq!(decoded.arguments[1], 500u64.to_le_bytes().to_vec());

        let typed = decoded
            .into_payload(&[TypeTag::Address, TypeTag::U64])
            .unwrap();
        assert_eq!(typed, payload);
    }

    #[test]
    fn test_typed_arguments_count_mismatch() {
        let bytes = transfer().encode().unwrap();
        let decoded = DecodedEntryFunction::from_bcs_bytes(&bytes).unwrap();
        assert!(decoded.typed_arguments(&[TypeTag::Address]).is_err());
    }

    #[test]
    fn test_decode_unsupported_kinds() {
        for (byte, what) in [
            (SCRIPT_PAYLOAD, "script"),
            (MODULE_BUNDLE_PAYLOAD, "module bundle"),
            (3, "variant"),
        ] {
            match DecodedEntryFunction::from_bcs_bytes(&[byte]) {
                Err(CodecError::UnsupportedVariant(msg)) => assert!(msg.contains(what), "{msg}"),
                other => panic!("expected unsupported variant, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut bytes = transfer().encode().unwrap();
        bytes.push(0);
        assert_eq!(
            DecodedEntryFunction::from_bcs_bytes(&bytes),
            Err(CodecError::TrailingBytes)
        );
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(TransactionPayload::from(transfer())).unwrap();
        assert_eq!(json["type"], "entry_function_payload");
        assert_eq!(
            json["function"],
            "0x0000000000000000000000000000000000000000000000000000000000000001::coin::transfer"
        );
        assert_eq!(json["arguments"][1], "500");

        let back: TransactionPayload = serde_json::from_value(json).unwrap();
        assert_eq!(back, TransactionPayload::from(transfer()));
    }
}
