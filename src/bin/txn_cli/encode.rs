//! encode and sign commands - build, encode and sign a transaction

use std::time::{Duration, UNIX_EPOCH};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser};
use serde::Serialize;
use tracing::debug;

use move_txn_kit::auth::{LocalAccount, TransactionSigner};
use move_txn_kit::config::{self, Profile};
use move_txn_kit::network::Network;
use move_txn_kit::submission::SubmitTransactionRequest;
use move_txn_kit::types::encoding::to_hex_literal;
use move_txn_kit::types::{
    parse_argument, parse_type_tag, Address, EntryFunctionPayload, FunctionTag, Transaction,
    TransactionBuilder, TransactionOption,
};

use super::output::{print_fields, print_json};
use super::CliContext;

/// Transaction fields shared by `encode` and `sign`.
#[derive(Args, Debug, Clone)]
pub struct TxArgs {
    /// Entry function, e.g. 0x1::aptos_account::transfer
    #[arg(value_name = "FUNCTION")]
    pub function: String,

    /// Type argument (repeatable, in order)
    #[arg(long = "type-arg", value_name = "TYPE")]
    pub type_args: Vec<String>,

    /// Argument as <type>:<value> with type one of u8, u64, u128, bool, address,
    /// string, hex; untyped values are inferred (repeatable, in order)
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Sender address (defaults to the signing account or profile account)
    #[arg(long)]
    pub sender: Option<String>,

    #[arg(long)]
    pub sequence_number: Option<u64>,

    /// Max gas amount [env: MOVE_TXN_MAX_GAS, default: 20000]
    #[arg(long)]
    pub max_gas: Option<u64>,

    /// Gas unit price [env: MOVE_TXN_GAS_UNIT_PRICE]
    #[arg(long)]
    pub gas_unit_price: Option<u64>,

    /// Absolute expiration as Unix seconds
    #[arg(long, conflicts_with = "expire_secs")]
    pub expiration: Option<u64>,

    /// Expire this many seconds from now [env: MOVE_TXN_EXPIRE_SECS, default: 300]
    #[arg(long)]
    pub expire_secs: Option<u64>,

    /// Chain id (overrides --network)
    #[arg(long)]
    pub chain_id: Option<u8>,

    /// Network whose chain id to use: mainnet, testnet, devnet, localnet
    #[arg(long)]
    pub network: Option<Network>,
}

impl TxArgs {
    pub fn payload(&self) -> Result<EntryFunctionPayload> {
        let function: FunctionTag = self
            .function
            .parse()
            .with_context(|| format!("invalid function '{}'", self.function))?;
        let type_arguments = self
            .type_args
            .iter()
            .map(|t| parse_type_tag(t).with_context(|| format!("invalid type argument '{t}'")))
            .collect::<Result<Vec<_>>>()?;
        let arguments = self
            .args
            .iter()
            .map(|a| parse_argument(a).with_context(|| format!("invalid argument '{a}'")))
            .collect::<Result<Vec<_>>>()?;
        Ok(EntryFunctionPayload::new(function, type_arguments, arguments))
    }

    fn chain_id(&self, profile: Option<&Profile>) -> Result<u8> {
        if let Some(id) = self.chain_id {
            return Ok(id);
        }
        let network = match self.network {
            Some(n) => Some(n),
            None => profile.map(Profile::network).transpose()?.flatten(),
        };
        network
            .and_then(|n| n.known_chain_id())
            .ok_or_else(|| anyhow!("chain id unknown: pass --chain-id or a --network with a fixed chain id"))
    }

    /// Build the transaction. `signer` is the account that will sign, if any.
    pub fn build(&self, profile: Option<&Profile>, signer: Option<Address>) -> Result<Transaction> {
        let sender = match self.sender.as_deref() {
            Some(s) => Some(
                Address::from_hex_literal(s).with_context(|| format!("invalid sender '{s}'"))?,
            ),
            None => match signer {
                Some(address) => Some(address),
                None => profile.map(Profile::account_address).transpose()?.flatten(),
            },
        };
        let Some(sender) = sender else {
            bail!("sender unknown: pass --sender or configure a profile");
        };

        let mut builder = TransactionBuilder::new(self.payload()?)
            .option(TransactionOption::Sender(sender))
            .option(TransactionOption::ChainId(self.chain_id(profile)?))
            .defaults(config::transaction_defaults());
        if let Some(seq) = self.sequence_number {
            builder = builder.option(TransactionOption::SequenceNumber(seq));
        }
        if let Some(max_gas) = self.max_gas {
            builder = builder.option(TransactionOption::MaxGasAmount(max_gas));
        }
        if let Some(price) = self.gas_unit_price {
            builder = builder.option(TransactionOption::GasUnitPrice(price));
        }
        if let Some(at) = self.expiration {
            let at = UNIX_EPOCH
                .checked_add(Duration::from_secs(at))
                .ok_or_else(|| anyhow!("--expiration {at} is beyond the representable time"))?;
            builder = builder.option(TransactionOption::ExpireAt(at));
        } else if let Some(secs) = self.expire_secs {
            builder = builder.option(TransactionOption::ExpireAfter(Duration::from_secs(secs)));
        }
        Ok(builder.build())
    }
}

#[derive(Debug, Serialize)]
struct EncodeOutput {
    transaction: Transaction,
    chain_id: u8,
    raw_transaction: String,
    signing_message: String,
    hash: String,
}

impl EncodeOutput {
    fn new(tx: &Transaction) -> Result<Self> {
        Ok(Self {
            transaction: tx.clone(),
            chain_id: tx.chain_id,
            raw_transaction: to_hex_literal(&tx.encode()?),
            signing_message: to_hex_literal(&tx.signing_message()?),
            hash: tx.hash_hex()?,
        })
    }
}

#[derive(Parser, Debug)]
pub struct EncodeCmd {
    #[command(flatten)]
    pub tx: TxArgs,
}

impl EncodeCmd {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let profile = ctx.profile()?;
        let tx = self.tx.build(profile.as_ref(), None)?;
        let output = EncodeOutput::new(&tx).context("failed to encode transaction")?;
        if ctx.json {
            return print_json(&output);
        }
        print_fields(&[
            ("function", tx.entry_function().function.to_string()),
            ("sender", tx.sender.to_string()),
            ("sequence_number", tx.sequence_number.to_string()),
            ("max_gas_amount", tx.max_gas_amount.to_string()),
            ("gas_unit_price", tx.gas_unit_price.to_string()),
            ("expiration", tx.expiration_timestamp_secs.to_string()),
            ("chain_id", tx.chain_id.to_string()),
            ("raw_transaction", output.raw_transaction),
            ("signing_message", output.signing_message),
            ("hash", output.hash),
        ]);
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct SignCmd {
    #[command(flatten)]
    pub tx: TxArgs,

    /// Private key hex (defaults to the profile's key)
    #[arg(long, env = "MOVE_TXN_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Emit an all-zero signature for the simulation endpoint
    #[arg(long)]
    pub simulate: bool,
}

impl SignCmd {
    fn account(&self, profile: Option<&Profile>) -> Result<LocalAccount> {
        if let Some(key) = self.private_key.as_deref() {
            return LocalAccount::from_private_key_hex(key).context("invalid --private-key");
        }
        profile
            .map(Profile::local_account)
            .transpose()?
            .flatten()
            .ok_or_else(|| anyhow!("no signing key: pass --private-key or configure a profile"))
    }

    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let profile = ctx.profile()?;
        let account = self.account(profile.as_ref())?;
        let tx = self.tx.build(profile.as_ref(), Some(account.address()))?;

        let signature = if self.simulate {
            account.sign_transaction_for_simulation(&tx)
        } else {
            account.sign_transaction(&tx)
        }
        .context("failed to sign transaction")?;
        let hash = tx.hash_hex()?;
        debug!(%hash, simulate = self.simulate, "signed transaction");

        let request = SubmitTransactionRequest::new(tx, signature);
        if ctx.json {
            return print_json(&request);
        }
        print_fields(&[
            ("hash", hash),
            ("signature", request.signature.signature_hex()),
        ]);
        println!("{}", request.to_json_pretty()?);
        Ok(())
    }
}
