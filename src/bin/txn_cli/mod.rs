//! CLI subcommand implementations for move-txn

pub mod account;
pub mod decode;
pub mod encode;
pub mod output;
pub mod type_tag;

use std::path::PathBuf;

use anyhow::{bail, Result};

use move_txn_kit::config::{self, Profile};

/// Global flags shared by every subcommand.
pub struct CliContext {
    pub json: bool,
    pub profile_name: String,
    pub config_path: Option<PathBuf>,
    explicit_profile: bool,
}

impl CliContext {
    pub fn new(json: bool, profile: Option<String>, config_path: Option<PathBuf>) -> Self {
        let explicit_profile = profile.is_some();
        Self {
            json,
            profile_name: config::profile_name(profile.as_deref()),
            config_path,
            explicit_profile,
        }
    }

    /// The selected profile. Only a profile asked for with `--profile` must exist.
    pub fn profile(&self) -> Result<Option<Profile>> {
        let profile = config::load_profile(self.config_path.as_deref(), &self.profile_name)?;
        if profile.is_none() && self.explicit_profile {
            bail!("profile '{}' not found in config", self.profile_name);
        }
        Ok(profile)
    }
}
