//! Move Transaction Auth
//!
//! Ed25519 keys, account addresses and transaction signatures.
//!
//! This crate provides:
//! - [`signature`]: signing and verifying signing messages
//! - [`address_derivation`]: single-key, multi-key and resource account addresses
//! - [`mnemonic`]: wallet-compatible key derivation from a phrase
//! - [`account`] and [`signer`]: an in-process account that signs its own transactions
//!
//! # Example
//!
//! ```
//! use move_txn_auth::{LocalAccount, TransactionSigner};
//! use move_txn_types::{EntryFunctionPayload, Transaction};
//!
//! let account = LocalAccount::generate();
//! let mut tx = Transaction::new(EntryFunctionPayload::new(
//!     "0x1::coin::transfer".parse().unwrap(),
//!     vec![],
//!     vec![],
//! ));
//! tx.sender = account.address();
//! let signature = account.sign_transaction(&tx).unwrap();
//! signature.verify(&tx.signing_message().unwrap()).unwrap();
//! ```

pub mod account;
pub mod address_derivation;
pub mod error;
pub mod mnemonic;
pub mod signature;
pub mod signer;

pub use account::LocalAccount;
pub use address_derivation::{
    derive_account_address, derive_resource_address, ed25519_address,
    generate_authentication_key, AuthenticationScheme,
};
pub use error::AuthError;
pub use mnemonic::{
    derive_ed25519_key, generate_mnemonic, mnemonic_to_seed, parse_mnemonic, DerivationPath,
    APTOS_DERIVATION_PATH,
};
pub use signature::{
    sign, sign_transaction, simulation_signature, SignatureScheme, SingleSignature,
};
pub use signer::{RawDataSigner, TransactionSigner};

// Key types callers need to construct accounts directly.
pub use ed25519_dalek::{SigningKey, VerifyingKey};
