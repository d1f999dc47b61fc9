//! Transaction options and the builder that applies them.
//!
//! Options either overwrite a field unconditionally ([`TransactionOption::apply`])
//! or fill it only while it is still at its zero value
//! ([`TransactionOptions::fill_if_default`]). A client typically keeps a set of
//! default options and fills each new transaction from them once.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::address::Address;
use crate::payload::TransactionPayload;
use crate::transaction::Transaction;

/// Default expiry window for new transactions.
pub const DEFAULT_EXPIRE_AFTER: Duration = Duration::from_secs(5 * 60);

/// Default gas limit for new transactions.
pub const DEFAULT_MAX_GAS_AMOUNT: u64 = 20_000;

/// A single setting for a transaction field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOption {
    MaxGasAmount(u64),
    GasUnitPrice(u64),
    /// Expire at a fixed point in time.
    ExpireAt(SystemTime),
    /// Expire this long after the option is applied.
    ExpireAfter(Duration),
    SequenceNumber(u64),
    Sender(Address),
    ChainId(u8),
}

impl TransactionOption {
    /// Overwrite the corresponding field of `tx`.
    pub fn apply(&self, tx: &mut Transaction) {
        match *self {
            TransactionOption::MaxGasAmount(v) => tx.max_gas_amount = v,
            TransactionOption::GasUnitPrice(v) => tx.gas_unit_price = v,
            TransactionOption::ExpireAt(at) => tx.expiration_timestamp_secs = unix_secs(at),
            TransactionOption::ExpireAfter(after) => {
                tx.expiration_timestamp_secs = expire_after_now(after)
            }
            TransactionOption::SequenceNumber(v) => tx.sequence_number = v,
            TransactionOption::Sender(v) => tx.sender = v,
            TransactionOption::ChainId(v) => tx.chain_id = v,
        }
    }
}

/// Seconds since the Unix epoch; times before the epoch clamp to 0.
pub fn unix_secs(t: SystemTime) -> u64 {
    t.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Expiration timestamp `after` from now, saturating at `u64::MAX` seconds.
pub fn expire_after_now(after: Duration) -> u64 {
    unix_secs(SystemTime::now()).saturating_add(after.as_secs())
}

impl Transaction {
    /// Apply options in order, later ones overwriting earlier ones.
    pub fn apply_options(&mut self, options: &[TransactionOption]) -> &mut Self {
        for option in options {
            option.apply(self);
        }
        self
    }
}

/// At most one option per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionOptions {
    pub max_gas_amount: Option<u64>,
    pub gas_unit_price: Option<u64>,
    pub expire_at: Option<SystemTime>,
    pub expire_after: Option<Duration>,
    pub sequence_number: Option<u64>,
    pub sender: Option<Address>,
    pub chain_id: Option<u8>,
}

impl TransactionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expire after five minutes, 20000 max gas.
    pub fn client_defaults() -> Self {
        Self::new()
            .with(TransactionOption::ExpireAfter(DEFAULT_EXPIRE_AFTER))
            .with(TransactionOption::MaxGasAmount(DEFAULT_MAX_GAS_AMOUNT))
    }

    /// Store `option`, replacing any previous option for the same field.
    pub fn set(&mut self, option: TransactionOption) {
        match option {
            TransactionOption::MaxGasAmount(v) => self.max_gas_amount = Some(v),
            TransactionOption::GasUnitPrice(v) => self.gas_unit_price = Some(v),
            TransactionOption::ExpireAt(v) => self.expire_at = Some(v),
            TransactionOption::ExpireAfter(v) => self.expire_after = Some(v),
            TransactionOption::SequenceNumber(v) => self.sequence_number = Some(v),
            TransactionOption::Sender(v) => self.sender = Some(v),
            TransactionOption::ChainId(v) => self.chain_id = Some(v),
        }
    }

    pub fn with(mut self, option: TransactionOption) -> Self {
        self.set(option);
        self
    }

    /// Fill fields of `tx` that are still zero. Set fields are left alone.
    ///
    /// A fixed expiry time takes precedence over a relative one.
    pub fn fill_if_default(&self, tx: &mut Transaction) {
        if tx.sender.is_zero() {
            if let Some(v) = self.sender {
                tx.sender = v;
            }
        }
        if tx.max_gas_amount == 0 {
            if let Some(v) = self.max_gas_amount {
                tx.max_gas_amount = v;
            }
        }
        if tx.gas_unit_price == 0 {
            if let Some(v) = self.gas_unit_price {
                tx.gas_unit_price = v;
            }
        }
        if tx.expiration_timestamp_secs == 0 {
            if let Some(at) = self.expire_at {
                tx.expiration_timestamp_secs = unix_secs(at);
            }
        }
        if tx.expiration_timestamp_secs == 0 {
            if let Some(after) = self.expire_after {
                tx.expiration_timestamp_secs = expire_after_now(after);
            }
        }
        if tx.sequence_number == 0 {
            if let Some(v) = self.sequence_number {
                tx.sequence_number = v;
            }
        }
        if tx.chain_id == 0 {
            if let Some(v) = self.chain_id {
                tx.chain_id = v;
            }
        }
    }
}

impl FromIterator<TransactionOption> for TransactionOptions {
    fn from_iter<I: IntoIterator<Item = TransactionOption>>(iter: I) -> Self {
        let mut options = Self::new();
        for option in iter {
            options.set(option);
        }
        options
    }
}

/// Builds a [`Transaction`] from a payload, explicit options and defaults.
///
/// ```
/// use move_txn_types::{
///     Address, EntryFunctionPayload, TransactionBuilder, TransactionOption, TransactionOptions,
/// };
///
/// let payload = EntryFunctionPayload::new("0x1::coin::transfer".parse().unwrap(), vec![], vec![]);
/// let tx = TransactionBuilder::new(payload)
///     .option(TransactionOption::Sender(Address::ONE))
///     .option(TransactionOption::ChainId(2))
///     .defaults(TransactionOptions::client_defaults())
///     .build();
/// assert_eq!(tx.max_gas_amount, 20_000);
/// assert_eq!(tx.chain_id, 2);
/// ```
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    payload: TransactionPayload,
    options: Vec<TransactionOption>,
    defaults: TransactionOptions,
}

impl TransactionBuilder {
    pub fn new(payload: impl Into<TransactionPayload>) -> Self {
        Self {
            payload: payload.into(),
            options: Vec::new(),
            defaults: TransactionOptions::default(),
        }
    }

    /// Option applied unconditionally, in the order given.
    pub fn option(mut self, option: TransactionOption) -> Self {
        self.options.push(option);
        self
    }

    /// Options used only for fields that are still unset after explicit options.
    pub fn defaults(mut self, defaults: TransactionOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn build(self) -> Transaction {
        let mut tx = Transaction::new(self.payload);
        tx.apply_options(&self.options);
        self.defaults.fill_if_default(&mut tx);
        debug!(
            sender = %tx.sender,
            sequence_number = tx.sequence_number,
            max_gas_amount = tx.max_gas_amount,
            gas_unit_price = tx.gas_unit_price,
            expiration_timestamp_secs = tx.expiration_timestamp_secs,
            chain_id = tx.chain_id,
            "built transaction"
        );
        tx
    }
}
