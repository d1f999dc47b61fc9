//! Profiles file and environment overrides.
//!
//! Profiles are read from the same YAML file the Aptos CLI writes:
//!
//! ```yaml
//! profiles:
//!   default:
//!     private_key: "0x…"
//!     public_key: "0x…"
//!     account: 767b7442…
//!     rest_url: "https://fullnode.testnet.aptoslabs.com/v1"
//!     network: Testnet
//! ```
//!
//! The file is looked up at `--config`, then `$MOVE_TXN_CONFIG`, then
//! `~/.aptos/config.yaml` and `~/.aptos/config.yml`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use move_txn_auth::LocalAccount;
use move_txn_types::options::{TransactionOption, TransactionOptions};
use move_txn_types::Address;

use crate::env_utils::{env_string_or, env_var};
use crate::network::Network;

pub const CONFIG_ENV: &str = "MOVE_TXN_CONFIG";
pub const PROFILE_ENV: &str = "MOVE_TXN_PROFILE";
pub const MAX_GAS_ENV: &str = "MOVE_TXN_MAX_GAS";
pub const GAS_UNIT_PRICE_ENV: &str = "MOVE_TXN_GAS_UNIT_PRICE";
pub const EXPIRE_SECS_ENV: &str = "MOVE_TXN_EXPIRE_SECS";

pub const DEFAULT_PROFILE: &str = "default";

/// Key prefix newer CLI versions write in front of private keys.
const ED25519_PRIVATE_KEY_PREFIX: &str = "ed25519-priv-";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        debug!(
            path = %path.display(),
            profiles = config.profiles.len(),
            "loaded config"
        );
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }
}

impl Profile {
    /// The profile's account address, if set.
    pub fn account_address(&self) -> Result<Option<Address>> {
        self.account
            .as_deref()
            .map(|a| {
                Address::from_hex_literal(a).with_context(|| format!("invalid account '{a}'"))
            })
            .transpose()
    }

    /// A signing account from the profile's private key.
    ///
    /// When the profile also names an account, that address is used even if
    /// it no longer matches the key.
    pub fn local_account(&self) -> Result<Option<LocalAccount>> {
        let Some(key) = self.private_key.as_deref() else {
            return Ok(None);
        };
        let key = key.strip_prefix(ED25519_PRIVATE_KEY_PREFIX).unwrap_or(key);
        let account =
            LocalAccount::from_private_key_hex(key).context("invalid private_key in profile")?;
        Ok(Some(match self.account_address()? {
            Some(address) => LocalAccount::with_address(account.signing_key().clone(), address),
            None => account,
        }))
    }

    /// The profile's network, falling back to a guess from `rest_url`.
    pub fn network(&self) -> Result<Option<Network>> {
        if let Some(name) = self.network.as_deref() {
            return name.parse().map(Some);
        }
        Ok(self.rest_url.as_deref().and_then(Network::infer_from_url))
    }
}

/// `~/.aptos`
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".aptos"))
}

/// The config file to read: explicit path, then env, then the first existing default.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_var::<PathBuf>(CONFIG_ENV) {
        return Some(path);
    }
    let dir = config_dir()?;
    ["config.yaml", "config.yml"]
        .into_iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

pub fn profile_name(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .unwrap_or_else(|| env_string_or(PROFILE_ENV, DEFAULT_PROFILE))
}

/// Load the named profile, if a config file and that profile exist.
///
/// An explicitly given file must exist; a missing default file is not an error.
pub fn load_profile(config_path: Option<&Path>, name: &str) -> Result<Option<Profile>> {
    let Some(path) = resolve_config_path(config_path) else {
        return Ok(None);
    };
    if config_path.is_none() && !path.exists() {
        return Ok(None);
    }
    let config = ConfigFile::load(&path)?;
    Ok(config.profile(name).cloned())
}

/// Client defaults with environment overrides applied.
pub fn transaction_defaults() -> TransactionOptions {
    let mut options = TransactionOptions::client_defaults();
    if let Some(max_gas) = env_var::<u64>(MAX_GAS_ENV) {
        options.set(TransactionOption::MaxGasAmount(max_gas));
    }
    if let Some(price) = env_var::<u64>(GAS_UNIT_PRICE_ENV) {
        options.set(TransactionOption::GasUnitPrice(price));
    }
    if let Some(secs) = env_var::<u64>(EXPIRE_SECS_ENV) {
        options.set(TransactionOption::ExpireAfter(Duration::from_secs(secs)));
    }
    options
}
