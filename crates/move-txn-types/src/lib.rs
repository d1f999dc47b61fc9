//! Move Transaction Types
//!
//! Canonical (BCS) encoding of Move type tags, entry-function payloads and raw
//! transactions, plus the signing message and hash derived from them.
//!
//! This crate provides:
//! - [`uleb128`]: variable-length integers used for lengths and counts
//! - [`codec`]: canonical bytes through the `bcs` crate, and the traits built on it
//! - [`address`], [`identifier`], [`module_tag`], [`type_tag`]: names on chain
//! - [`argument`]: typed entry-function arguments and their JSON forms
//! - [`payload`], [`transaction`]: what gets signed
//! - [`options`]: transaction defaults and the builder
//!
//! # Example
//!
//! ```
//! use move_txn_types::{parse_type_tag, ArgumentValue, EntryFunctionPayload, Transaction};
//!
//! let payload = EntryFunctionPayload::new(
//!     "0x1::coin::transfer".parse().unwrap(),
//!     vec![parse_type_tag("0x1::aptos_coin::AptosCoin").unwrap()],
//!     vec![ArgumentValue::Address("0x2".parse().unwrap()), ArgumentValue::U64(100)],
//! );
//! let tx = Transaction::new(payload);
//! assert_eq!(
//!     tx.signing_message().unwrap().len(),
//!     32 + tx.encode().unwrap().len()
//! );
//! ```

pub mod address;
pub mod argument;
pub mod codec;
pub mod encoding;
pub mod error;
pub mod identifier;
pub mod json;
pub mod module_tag;
pub mod options;
pub mod payload;
pub mod transaction;
pub mod type_tag;
pub mod uint128;
pub mod uleb128;
mod wire;

// Re-export main types
pub use address::{normalize_address, Address};
pub use argument::{parse_argument, parse_typed_argument, ArgumentValue};
pub use codec::{CanonicalDeserialize, CanonicalSerialize};
pub use error::{CodecError, ParseError};
pub use identifier::Identifier;
pub use module_tag::{FunctionTag, ModuleTag};
pub use options::{TransactionBuilder, TransactionOption, TransactionOptions};
pub use payload::{DecodedEntryFunction, EntryFunctionPayload, TransactionPayload};
pub use transaction::{DecodedTransaction, Transaction, RAW_TRANSACTION_PREFIX};
pub use type_tag::{parse_struct_tag, parse_type_tag, StructTag, TypeTag, MAX_TYPE_TAG_NESTING};
pub use uint128::Uint128;
