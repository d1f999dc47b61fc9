//! Mnemonic phrases to Ed25519 keys.
//!
//! Phrases must be English BIP-39: every word in the wordlist and a valid
//! checksum. The phrase is stretched to a 64-byte seed by `bip39`, and the
//! seed is walked down a hardened-only SLIP-0010 path. Wallets use
//! [`APTOS_DERIVATION_PATH`].

use std::fmt;
use std::str::FromStr;

use bip39::{Language, Mnemonic};
use ed25519_dalek::SigningKey;
use hmac::{Hmac, Mac};
use rand_core::OsRng;
use sha2::Sha512;

use crate::error::AuthError;

/// Path used by wallets for the first account.
pub const APTOS_DERIVATION_PATH: &str = "m/44'/637'/0'/0'/0'";

/// Added to every path segment; ed25519 derivation is hardened only.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Word count of freshly generated phrases.
pub const GENERATED_WORD_COUNT: usize = 12;

const HMAC_KEY: &[u8] = b"ed25519 seed";

type HmacSha512 = Hmac<Sha512>;

/// Parse and validate an English phrase.
///
/// Runs of whitespace between words are collapsed.
pub fn parse_mnemonic(mnemonic: &str) -> Result<Mnemonic, AuthError> {
    Mnemonic::parse_in_normalized(Language::English, mnemonic)
        .map_err(|e| AuthError::InvalidMnemonic(e.to_string()))
}

/// Stretch a mnemonic into its 64-byte seed.
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> Result<[u8; 64], AuthError> {
    Ok(parse_mnemonic(mnemonic)?.to_seed(passphrase))
}

/// A new random phrase of [`GENERATED_WORD_COUNT`] words.
pub fn generate_mnemonic() -> Result<Mnemonic, AuthError> {
    Mnemonic::generate_in_with(&mut OsRng, Language::English, GENERATED_WORD_COUNT)
        .map_err(|e| AuthError::InvalidMnemonic(e.to_string()))
}

/// A hardened-only derivation path such as `m/44'/637'/0'/0'/0'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPath(Vec<u32>);

impl DerivationPath {
    pub fn aptos() -> Self {
        DerivationPath(vec![44, 637, 0, 0, 0])
    }

    /// Segment indices without the hardened offset.
    pub fn indices(&self) -> &[u32] {
        &self.0
    }
}

impl FromStr for DerivationPath {
    type Err = AuthError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let invalid = || AuthError::InvalidMnemonicPath(path.to_string());
        let mut segments = path.split('/');
        if segments.next() != Some("m") {
            return Err(invalid());
        }
        let indices = segments
            .map(|segment| {
                let digits = segment.strip_suffix('\'').ok_or_else(invalid)?;
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let index: u32 = digits.parse().map_err(|_| invalid())?;
                if index >= HARDENED_OFFSET {
                    return Err(invalid());
                }
                Ok(index)
            })
            .collect::<Result<Vec<_>, _>>()?;
        if indices.is_empty() {
            return Err(invalid());
        }
        Ok(DerivationPath(indices))
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.0 {
            write!(f, "/{index}'")?;
        }
        Ok(())
    }
}

/// Private key and chain code at one node of the derivation tree.
struct ExtendedKey {
    key: [u8; 32],
    chain_code: [u8; 32],
}

impl ExtendedKey {
    fn master(seed: &[u8]) -> Result<Self, AuthError> {
        Self::from_hmac(HMAC_KEY, &[seed])
    }

    fn child(&self, index: u32) -> Result<Self, AuthError> {
        let hardened = (index | HARDENED_OFFSET).to_be_bytes();
        Self::from_hmac(&self.chain_code, &[&[0u8][..], &self.key[..], &hardened[..]])
    }

    fn from_hmac(key: &[u8], parts: &[&[u8]]) -> Result<Self, AuthError> {
        let mut mac =
            HmacSha512::new_from_slice(key).map_err(|e| AuthError::InvalidKey(e.to_string()))?;
        for part in parts {
            mac.update(part);
        }
        let digest = mac.finalize().into_bytes();
        let mut out = ExtendedKey {
            key: [0u8; 32],
            chain_code: [0u8; 32],
        };
        out.key.copy_from_slice(&digest[..32]);
        out.chain_code.copy_from_slice(&digest[32..]);
        Ok(out)
    }
}

/// Derive the Ed25519 signing key at `path` from a seed.
pub fn derive_ed25519_key(seed: &[u8], path: &DerivationPath) -> Result<SigningKey, AuthError> {
    let mut node = ExtendedKey::master(seed)?;
    for index in path.indices() {
        node = node.child(*index)?;
    }
    Ok(SigningKey::from_bytes(&node.key))
}
