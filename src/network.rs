//! Known networks, their chain ids and default REST endpoints.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

const MAINNET_REST: &str = "https://fullnode.mainnet.aptoslabs.com/v1";
const TESTNET_REST: &str = "https://fullnode.testnet.aptoslabs.com/v1";
const DEVNET_REST: &str = "https://fullnode.devnet.aptoslabs.com/v1";
const LOCALNET_REST: &str = "http://127.0.0.1:8080/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    /// Devnet is reset periodically, so its chain id is not fixed.
    Devnet,
    Localnet,
}

impl Network {
    /// Chain id, or 0 when it has to be supplied by the caller.
    pub fn chain_id(&self) -> u8 {
        match self {
            Network::Mainnet => 1,
            Network::Testnet => 2,
            Network::Devnet => 0,
            Network::Localnet => 4,
        }
    }

    pub fn known_chain_id(&self) -> Option<u8> {
        Some(self.chain_id()).filter(|id| *id != 0)
    }

    pub fn default_rest_url(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_REST,
            Network::Testnet => TESTNET_REST,
            Network::Devnet => DEVNET_REST,
            Network::Localnet => LOCALNET_REST,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Localnet => "localnet",
        }
    }

    /// Guess the network from a REST URL.
    pub fn infer_from_url(url: &str) -> Option<Network> {
        let lower = url.to_lowercase();
        if lower.contains("testnet") {
            Some(Network::Testnet)
        } else if lower.contains("devnet") {
            Some(Network::Devnet)
        } else if lower.contains("mainnet") {
            Some(Network::Mainnet)
        } else if lower.contains("127.0.0.1") || lower.contains("localhost") {
            Some(Network::Localnet)
        } else {
            None
        }
    }
}

impl FromStr for Network {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            "localnet" | "local" => Ok(Network::Localnet),
            other => Err(anyhow!(
                "unknown network '{other}' (expected mainnet, testnet, devnet or localnet)"
            )),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
