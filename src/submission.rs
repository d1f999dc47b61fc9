//! JSON bodies exchanged with a node's REST API.
//!
//! Requests inline the transaction's fields next to their own. Responses carry
//! the transaction plus execution info, all at the top level.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use move_txn_auth::SingleSignature;
use move_txn_types::json::{option_u64_string, u64_string};
use move_txn_types::{Address, Transaction};

/// Body of `POST /transactions/encode_submission`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeSubmissionRequest {
    #[serde(flatten)]
    pub transaction: Transaction,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_signers: Vec<Address>,
}

impl EncodeSubmissionRequest {
    pub fn new(transaction: Transaction) -> Self {
        Self {
            transaction,
            secondary_signers: Vec::new(),
        }
    }
}

/// Body of `POST /transactions` and `POST /transactions/simulate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitTransactionRequest {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub signature: SingleSignature,
}

impl SubmitTransactionRequest {
    pub fn new(transaction: Transaction, signature: SingleSignature) -> Self {
        Self {
            transaction,
            signature,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Execution results of a committed or simulated transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInfo {
    pub hash: String,
    #[serde(default)]
    pub state_change_hash: String,
    #[serde(default)]
    pub event_root_hash: String,
    #[serde(default)]
    pub state_checkpoint_hash: Option<String>,
    #[serde(default, with = "u64_string")]
    pub gas_used: u64,
    #[serde(default)]
    pub success: bool,
    /// Useful for debugging failed transactions.
    #[serde(default)]
    pub vm_status: String,
    #[serde(default)]
    pub accumulator_root_hash: String,
    #[serde(default, with = "option_u64_string")]
    pub version: Option<u64>,
    #[serde(default)]
    pub changes: Vec<Value>,
    #[serde(default)]
    pub events: Vec<Value>,
    #[serde(default, with = "option_u64_string")]
    pub timestamp: Option<u64>,
}

/// A transaction together with the result of executing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionWithInfo {
    #[serde(flatten)]
    pub transaction: Transaction,
    /// e.g. `user_transaction`, `pending_transaction`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub info: TransactionInfo,
}
