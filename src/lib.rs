//! Move Transaction Kit
//!
//! Build, encode, sign and hash Move entry-function transactions offline:
//!
//! - **Canonical encoding**: type tags, payloads and raw transactions ([`types`])
//! - **Signing**: Ed25519 keys, account addresses and signatures ([`auth`])
//! - **Configuration**: profiles from `~/.aptos/config.yaml` and environment overrides ([`config`])
//! - **Submission bodies**: the JSON a node accepts and returns ([`submission`])
//!
//! See the `move-txn` binary for a command-line front end.

pub mod config;
pub mod env_utils;
pub mod network;
pub mod submission;

pub use move_txn_auth as auth;
pub use move_txn_types as types;

pub use config::{ConfigFile, Profile};
pub use network::Network;
pub use submission::{
    EncodeSubmissionRequest, SubmitTransactionRequest, TransactionInfo, TransactionWithInfo,
};
