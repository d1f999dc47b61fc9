//! Accounts whose private key is held in process.

use std::fmt;

use ed25519_dalek::{SigningKey, VerifyingKey};
use rand_core::OsRng;
use tracing::debug;

use move_txn_types::encoding::{parse_hex_array, to_hex_literal};
use move_txn_types::Address;

use crate::address_derivation::ed25519_address;
use crate::error::AuthError;
use crate::mnemonic::{derive_ed25519_key, generate_mnemonic, mnemonic_to_seed, DerivationPath};

/// A private key and the account address it signs for.
///
/// The address normally derives from the public key, but an account whose
/// authentication key was rotated keeps its original address; see
/// [`LocalAccount::with_address`].
#[derive(Clone)]
pub struct LocalAccount {
    signing_key: SigningKey,
    address: Address,
}

impl LocalAccount {
    pub fn new(signing_key: SigningKey) -> Self {
        let address = ed25519_address(&signing_key.verifying_key());
        Self {
            signing_key,
            address,
        }
    }

    /// Key signing for an account at a different address.
    pub fn with_address(signing_key: SigningKey, address: Address) -> Self {
        Self {
            signing_key,
            address,
        }
    }

    /// From a 32-byte private key seed in hex, `0x` optional.
    pub fn from_private_key_hex(hex_str: &str) -> Result<Self, AuthError> {
        let seed = parse_hex_array::<32>(hex_str)
            .map_err(|_| AuthError::InvalidKey("expected 32 bytes of hex".to_string()))?;
        Ok(Self::new(SigningKey::from_bytes(&seed)))
    }

    pub fn generate() -> Self {
        let account = Self::new(SigningKey::generate(&mut OsRng));
        debug!(address = %account.address, "generated account");
        account
    }

    /// A fresh phrase and the wallet account it derives, without a passphrase.
    pub fn generate_with_mnemonic() -> Result<(Self, String), AuthError> {
        let phrase = generate_mnemonic()?.to_string();
        let account = Self::from_mnemonic(&phrase, "")?;
        Ok((account, phrase))
    }

    /// Wallet-compatible account at `m/44'/637'/0'/0'/0'`.
    pub fn from_mnemonic(mnemonic: &str, passphrase: &str) -> Result<Self, AuthError> {
        Self::from_mnemonic_with_path(mnemonic, passphrase, &DerivationPath::aptos())
    }

    pub fn from_mnemonic_with_path(
        mnemonic: &str,
        passphrase: &str,
        path: &DerivationPath,
    ) -> Result<Self, AuthError> {
        let seed = mnemonic_to_seed(mnemonic, passphrase)?;
        let account = Self::new(derive_ed25519_key(&seed, path)?);
        debug!(address = %account.address, %path, "derived account from mnemonic");
        Ok(account)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub fn public_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    pub fn public_key_hex(&self) -> String {
        to_hex_literal(self.public_key().as_bytes())
    }

    pub fn private_key_hex(&self) -> String {
        to_hex_literal(&self.signing_key.to_bytes())
    }

    /// True if the address is the one derived from this account's public key.
    pub fn is_original_authentication_key(&self) -> bool {
        ed25519_address(&self.public_key()) == self.address
    }
}

impl fmt::Debug for LocalAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalAccount")
            .field("address", &self.address)
            .field("public_key", &self.public_key_hex())
            .finish_non_exhaustive()
    }
}
