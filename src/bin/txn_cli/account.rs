//! account command - derive addresses and keys

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use move_txn_kit::auth::mnemonic::APTOS_DERIVATION_PATH;
use move_txn_kit::auth::{
    derive_account_address, derive_resource_address, AuthenticationScheme, DerivationPath,
    LocalAccount, VerifyingKey,
};
use move_txn_kit::types::encoding::{parse_hex_array, parse_hex_bytes};
use move_txn_kit::types::Address;

use super::output::{print_fields, print_json};
use super::CliContext;

#[derive(Parser, Debug)]
pub struct AccountCmd {
    #[command(subcommand)]
    pub action: AccountAction,
}

#[derive(Subcommand, Debug)]
pub enum AccountAction {
    /// Account address for one public key, or a K-of-N multi-key account
    Derive {
        /// Ed25519 public key hex (repeat for multi-key)
        #[arg(long = "public-key", value_name = "HEX", required = true)]
        public_keys: Vec<String>,

        /// Signatures required (multi-key only, default: all keys)
        #[arg(long)]
        required: Option<u8>,
    },
    /// Address of a resource account
    Resource {
        /// Creating account
        #[arg(long)]
        parent: String,

        /// Seed, as UTF-8 text unless --seed-hex is given
        #[arg(long)]
        seed: String,

        /// Treat the seed as hex
        #[arg(long)]
        seed_hex: bool,
    },
    /// Wallet-compatible account from a mnemonic phrase
    FromMnemonic {
        #[arg(long, env = "MOVE_TXN_MNEMONIC", hide_env_values = true)]
        mnemonic: String,

        #[arg(long, default_value = "")]
        passphrase: String,

        #[arg(long, default_value = APTOS_DERIVATION_PATH)]
        path: String,
    },
    /// Generate a new random account
    New {
        /// Derive the key from a fresh 12-word phrase and print the phrase
        #[arg(long)]
        mnemonic: bool,
    },
}

#[derive(Debug, Serialize)]
struct AccountOutput {
    address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    public_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mnemonic: Option<String>,
}

impl AccountOutput {
    fn address_only(address: Address) -> Self {
        Self {
            address: address.to_string(),
            public_key: None,
            private_key: None,
            mnemonic: None,
        }
    }

    fn from_account(account: &LocalAccount) -> Self {
        Self {
            address: account.address().to_string(),
            public_key: Some(account.public_key_hex()),
            private_key: Some(account.private_key_hex()),
            mnemonic: None,
        }
    }
}

fn parse_public_key(hex_str: &str) -> Result<VerifyingKey> {
    let bytes = parse_hex_array::<32>(hex_str)
        .with_context(|| format!("public key '{hex_str}' is not 32 bytes of hex"))?;
    VerifyingKey::from_bytes(&bytes).with_context(|| format!("invalid public key '{hex_str}'"))
}

impl AccountCmd {
    pub fn execute(&self, ctx: &CliContext) -> Result<()> {
        let output = self.execute_inner()?;
        if ctx.json {
            return print_json(&output);
        }
        let mut fields = vec![("address", output.address.clone())];
        if let Some(pk) = &output.public_key {
            fields.push(("public_key", pk.clone()));
        }
        if let Some(sk) = &output.private_key {
            fields.push(("private_key", sk.clone()));
        }
        if let Some(phrase) = &output.mnemonic {
            fields.push(("mnemonic", phrase.clone()));
        }
        print_fields(&fields);
        Ok(())
    }

    fn execute_inner(&self) -> Result<AccountOutput> {
        match &self.action {
            AccountAction::Derive {
                public_keys,
                required,
            } => {
                let keys = public_keys
                    .iter()
                    .map(|k| parse_public_key(k))
                    .collect::<Result<Vec<_>>>()?;
                let scheme = if keys.len() == 1 && required.is_none() {
                    AuthenticationScheme::Ed25519(keys[0])
                } else {
                    let required = match required {
                        Some(k) => *k,
                        None => u8::try_from(keys.len()).context("too many public keys")?,
                    };
                    AuthenticationScheme::MultiEd25519 {
                        public_keys: keys,
                        required,
                    }
                };
                let address = derive_account_address(&scheme)?;
                Ok(AccountOutput::address_only(address))
            }
            AccountAction::Resource {
                parent,
                seed,
                seed_hex,
            } => {
                let parent = Address::from_hex_literal(parent)
                    .with_context(|| format!("invalid parent address '{parent}'"))?;
                let seed = if *seed_hex {
                    parse_hex_bytes(seed).context("invalid seed hex")?
                } else {
                    seed.as_bytes().to_vec()
                };
                Ok(AccountOutput::address_only(derive_resource_address(
                    &parent, &seed,
                )))
            }
            AccountAction::FromMnemonic {
                mnemonic,
                passphrase,
                path,
            } => {
                let path: DerivationPath = path.parse()?;
                let account = LocalAccount::from_mnemonic_with_path(mnemonic, passphrase, &path)?;
                Ok(AccountOutput::from_account(&account))
            }
            AccountAction::New { mnemonic: false } => {
                Ok(AccountOutput::from_account(&LocalAccount::generate()))
            }
            AccountAction::New { mnemonic: true } => {
                let (account, phrase) = LocalAccount::generate_with_mnemonic()?;
                Ok(AccountOutput {
                    mnemonic: Some(phrase),
                    ..AccountOutput::from_account(&account)
                })
            }
        }
    }
}
