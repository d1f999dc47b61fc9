//! Raw (unsigned) transactions.
//!
//! ## Wire layout
//!
//! Fields are written in this order, which is part of the ledger's contract:
//!
//! | field | encoding |
//! |---|---|
//! | sender | 32 raw bytes |
//! | sequence_number | u64 LE |
//! | payload | see [`crate::payload`] |
//! | max_gas_amount | u64 LE |
//! | gas_unit_price | u64 LE |
//! | expiration_timestamp_secs | u64 LE |
//! | chain_id | u8 |
//!
//! The signing message is `sha3_256("APTOS::RawTransaction") || encode(tx)`, and
//! the transaction hash is `sha3_256(signing message)`.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::address::Address;
use crate::codec::{self, CanonicalDeserialize, CanonicalSerialize};
use crate::encoding::sha3_256;
use crate::error::CodecError;
use crate::payload::{DecodedEntryFunction, EntryFunctionPayload, TransactionPayload};
use crate::wire::RawTransactionWire;

/// Domain string hashed into the signing prefix.
pub const RAW_TRANSACTION_SALT: &[u8] = b"APTOS::RawTransaction";

/// `sha3_256("APTOS::RawTransaction")`, prepended to every signing message.
pub static RAW_TRANSACTION_PREFIX: LazyLock<[u8; 32]> =
    LazyLock::new(|| sha3_256(&[RAW_TRANSACTION_SALT]));

/// A transaction without signatures.
///
/// `chain_id` is part of the canonical bytes but not of the JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: Address,
    #[serde(with = "crate::json::u64_string")]
    pub sequence_number: u64,
    pub payload: TransactionPayload,
    #[serde(with = "crate::json::u64_string")]
    pub max_gas_amount: u64,
    #[serde(with = "crate::json::u64_string")]
    pub gas_unit_price: u64,
    #[serde(with = "crate::json::u64_string")]
    pub expiration_timestamp_secs: u64,
    #[serde(skip)]
    pub chain_id: u8,
}

impl Transaction {
    /// A transaction carrying `payload` with every other field unset.
    pub fn new(payload: impl Into<TransactionPayload>) -> Self {
        Self {
            sender: Address::ZERO,
            sequence_number: 0,
            payload: payload.into(),
            max_gas_amount: 0,
            gas_unit_price: 0,
            expiration_timestamp_secs: 0,
            chain_id: 0,
        }
    }

    /// Canonical bytes of the transaction (no prefix).
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        self.to_bcs_bytes()
    }

    /// Bytes that get signed: the domain prefix followed by [`Transaction::encode`].
    pub fn signing_message(&self) -> Result<Vec<u8>, CodecError> {
        let body = self.encode()?;
        let mut message = Vec::with_capacity(RAW_TRANSACTION_PREFIX.len() + body.len());
        message.extend_from_slice(&*RAW_TRANSACTION_PREFIX);
        message.extend_from_slice(&body);
        trace!(
            sender = %self.sender,
            sequence_number = self.sequence_number,
            len = message.len(),
            "built signing message"
        );
        Ok(message)
    }

    /// Transaction hash: `sha3_256` of the signing message.
    pub fn hash(&self) -> Result<[u8; 32], CodecError> {
        Ok(sha3_256(&[self.signing_message()?.as_slice()]))
    }

    /// Hash as `0x`-prefixed hex, the form used to look a transaction up.
    pub fn hash_hex(&self) -> Result<String, CodecError> {
        Ok(crate::encoding::to_hex_literal(&self.hash()?))
    }

    pub fn entry_function(&self) -> &EntryFunctionPayload {
        self.payload.as_entry_function()
    }
}

impl CanonicalSerialize for Transaction {
    fn to_bcs_bytes(&self) -> Result<Vec<u8>, CodecError> {
        codec::to_bytes(&RawTransactionWire::try_from(self)?)
    }
}

/// A transaction read back from canonical bytes, with untyped arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTransaction {
    pub sender: Address,
    pub sequence_number: u64,
    pub payload: DecodedEntryFunction,
    pub max_gas_amount: u64,
    pub gas_unit_price: u64,
    pub expiration_timestamp_secs: u64,
    pub chain_id: u8,
}

impl DecodedTransaction {
    /// Decode raw transaction bytes, as produced by [`Transaction::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        Self::from_bcs_bytes(bytes)
    }

    /// Decode a signing message, which must start with [`RAW_TRANSACTION_PREFIX`].
    pub fn decode_signing_message(message: &[u8]) -> Result<Self, CodecError> {
        let body = message
            .strip_prefix(RAW_TRANSACTION_PREFIX.as_slice())
            .ok_or(CodecError::MissingSigningPrefix)?;
        Self::from_bcs_bytes(body)
    }

    /// Rebuild the typed transaction given the entry function's parameter types.
    pub fn into_transaction(
        self,
        params: &[crate::type_tag::TypeTag],
    ) -> Result<Transaction, CodecError> {
        let payload = self.payload.into_payload(params)?;
        Ok(Transaction {
            sender: self.sender,
            sequence_number: self.sequence_number,
            payload: payload.into(),
            max_gas_amount: self.max_gas_amount,
            gas_unit_price: self.gas_unit_price,
            expiration_timestamp_secs: self.expiration_timestamp_secs,
            chain_id: self.chain_id,
        })
    }
}

impl CanonicalDeserialize for DecodedTransaction {
    fn from_bcs_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        DecodedTransaction::try_from(codec::from_bytes::<RawTransactionWire>(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::ArgumentValue;
    use crate::type_tag::TypeTag;

    const FAKE_COIN: &str = "0x8b7311d78d47e37d09435b8dc37c14afd977c5cfa74f974d45f0258d986eef53";
    const SENDER: &str = "0x7d928500a7c0176468d16bd391c5b551bcea5c08394b19690ec8233fd464bcef";

    /// Mint of 10000000000 fake USDC, sequence 0, chain 2.
    fn mint_usdc() -> Transaction {
        let payload = EntryFunctionPayload::new(
            format!("{FAKE_COIN}::fake_coin::mint").parse().unwrap(),
            vec![format!("{FAKE_COIN}::fake_coin::USDC").parse().unwrap()],
            vec![ArgumentValue::U64(10_000_000_000)],
        );
        Transaction {
            sender: SENDER.parse().unwrap(),
            sequence_number: 0,
            payload: payload.into(),
            max_gas_amount: 20_000,
            gas_unit_price: 100,
            // 3000-12-31T00:00:00Z
            expiration_timestamp_secs: 32_535_129_600,
            chain_id: 2,
        }
    }

    const MINT_USDC_BCS: &str = "7d928500a7c0176468d16bd391c5b551bcea5c08394b19690ec8233fd464bcef0000000000000000028b7311d78d47e37d09435b8dc37c14afd977c5cfa74f974d45f0258d986eef530966616b655f636f696e046d696e7401078b7311d78d47e37d09435b8dc37c14afd977c5cfa74f974d45f0258d986eef530966616b655f636f696e045553444300010800e40b5402000000204e000000000000640000000000000000ae3e930700000002";

    #[test]
    fn test_prefix_value() {
        assert_eq!(
            hex::encode(*RAW_TRANSACTION_PREFIX),
            "b5e97db07fa0bd0e5598aa3643a9bc6f6693bddc1a9fec9e674a461eaa00b193"
        );
    }

    #[test]
    fn test_encode_matches_vector() {
        assert_eq!(hex::encode(mint_usdc().encode().unwrap()), MINT_USDC_BCS);
    }

    #[test]
    fn test_signing_message_is_prefixed() {
        let message = mint_usdc().signing_message().unwrap();
        assert_eq!(&message[..32], RAW_TRANSACTION_PREFIX.as_slice());
        assert_eq!(hex::encode(&message[32..]), MINT_USDC_BCS);
    }

    #[test]
    fn test_hash_is_single_pass() {
        let tx = mint_usdc();
        let message = tx.signing_message().unwrap();
        assert_eq!(tx.hash().unwrap(), sha3_256(&[message.as_slice()]));
        assert_eq!(tx.hash_hex().unwrap().len(), 66);
    }

    #[test]
    fn test_decode_round_trip() {
        let tx = mint_usdc();
        let decoded = [
            DecodedTransaction::decode(&tx.encode().unwrap()).unwrap(),
            DecodedTransaction::decode_signing_message(&tx.signing_message().unwrap()).unwrap(),
        ];
        for decoded in decoded {
            assert_eq!(decoded.chain_id, 2);
            assert_eq!(decoded.expiration_timestamp_secs, 32_535_129_600);
            let rebuilt = decoded.into_transaction(&[TypeTag::U64]).unwrap();
            assert_eq!(rebuilt, tx);
        }
    }

    #[test]
    fn test_raw_bytes_starting_with_prefix_are_not_stripped() {
        // a sender equal to the prefix puts the prefix bytes at the front of the raw form
        let tx = Transaction {
            sender: Address::new(*RAW_TRANSACTION_PREFIX),
            ..mint_usdc()
        };
        let bytes = tx.encode().unwrap();
        assert_eq!(&bytes[..32], RAW_TRANSACTION_PREFIX.as_slice());

        let decoded = DecodedTransaction::decode(&bytes).unwrap();
        assert_eq!(decoded.sender, tx.sender);
        assert_eq!(decoded.into_transaction(&[TypeTag::U64]).unwrap(), tx);
    }

    #[test]
    fn test_decode_signing_message_requires_prefix() {
        let bytes = mint_usdc().encode().unwrap();
        assert_eq!(
            DecodedTransaction::decode_signing_message(&bytes),
            Err(CodecError::MissingSigningPrefix)
        );
    }

    #[test]
    fn test_decode_truncated() {
        let bytes = mint_usdc().encode().unwrap();
        assert!(matches!(
            DecodedTransaction::decode(&bytes[..bytes.len() - 1]),
            Err(CodecError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn test_json_omits_chain_id() {
        let tx = mint_usdc();
        let json = serde_json::to_value(&tx).unwrap();
        assert!(json.get("chain_id").is_none());
        assert_eq!(json["sequence_number"], "0");
        assert_eq!(json["max_gas_amount"], "20000");
        assert_eq!(json["expiration_timestamp_secs"], "32535129600");
        assert_eq!(json["payload"]["type"], "entry_function_payload");
        assert_eq!(json["payload"]["arguments"][0], "10000000000");

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back.chain_id, 0);
        let (ours, theirs) = (back.encode().unwrap(), tx.encode().unwrap());
        assert_eq!(ours[..ours.len() - 1], theirs[..theirs.len() - 1]);
    }
}
