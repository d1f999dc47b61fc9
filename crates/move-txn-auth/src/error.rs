//! Error type for key handling, address derivation and signing.

use move_txn_types::{Address, CodecError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Key bytes are malformed or the wrong length.
    InvalidKey(String),

    /// The declared signer count does not match the number of keys supplied.
    KeyCountMismatch { expected: usize, found: usize },

    /// More signatures are required than there are keys.
    RequiredSignersExceedKeys { required: usize, keys: usize },

    /// No keys were supplied, or zero signatures are required.
    NoSigners,

    /// An account was asked to sign a transaction sent by someone else.
    SenderMismatch { sender: Address, signer: Address },

    /// The signature does not verify against the message and public key.
    InvalidSignature(String),

    /// The mnemonic phrase is malformed.
    InvalidMnemonic(String),

    /// The derivation path is not of the form `m/44'/637'/...`, all hardened.
    InvalidMnemonicPath(String),

    Codec(CodecError),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidKey(msg) => write!(f, "invalid key: {msg}"),
            AuthError::KeyCountMismatch { expected, found } => {
                write!(f, "require {expected} public keys, but {found} are present")
            }
            AuthError::RequiredSignersExceedKeys { required, keys } => write!(
                f,
                "required signature count {required} exceeds public key count {keys}"
            ),
            AuthError::NoSigners => write!(f, "at least one signer is required"),
            AuthError::SenderMismatch { sender, signer } => write!(
                f,
                "account {signer} cannot sign for sender {sender}"
            ),
            AuthError::InvalidSignature(msg) => write!(f, "invalid signature: {msg}"),
            AuthError::InvalidMnemonic(msg) => write!(f, "invalid mnemonic: {msg}"),
            AuthError::InvalidMnemonicPath(path) => write!(f, "invalid derivation path '{path}'"),
            AuthError::Codec(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for AuthError {
    fn from(e: CodecError) -> Self {
        AuthError::Codec(e)
    }
}
