//! Ed25519 transaction signatures.
//!
//! A [`SingleSignature`] pairs a public key with a signature over a signing
//! message. Its JSON form is what a node expects in a submission body:
//!
//! ```json
//! {"type": "ed25519_signature", "public_key": "0x…", "signature": "0x…"}
//! ```

use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use serde::{Deserialize, Serialize};
use tracing::debug;

use move_txn_types::Transaction;

use crate::error::AuthError;

/// Length of an Ed25519 signature.
pub const SIGNATURE_LENGTH: usize = 64;

/// Length of an Ed25519 public key.
pub const PUBLIC_KEY_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureScheme {
    #[serde(rename = "ed25519_signature")]
    Ed25519,
}

/// One signer's signature together with the key that verifies it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SingleSignature {
    #[serde(rename = "type")]
    pub scheme: SignatureScheme,
    #[serde(with = "prefixed_hex")]
    pub public_key: [u8; PUBLIC_KEY_LENGTH],
    #[serde(with = "prefixed_hex")]
    pub signature: [u8; SIGNATURE_LENGTH],
}

impl SingleSignature {
    pub fn new(public_key: &VerifyingKey, signature: &Signature) -> Self {
        Self {
            scheme: SignatureScheme::Ed25519,
            public_key: public_key.to_bytes(),
            signature: signature.to_bytes(),
        }
    }

    /// True for the all-zero placeholder used when simulating.
    pub fn is_simulation(&self) -> bool {
        self.signature == [0u8; SIGNATURE_LENGTH]
    }

    /// Check the signature over `message` against the embedded public key.
    pub fn verify(&self, message: &[u8]) -> Result<(), AuthError> {
        let key = VerifyingKey::from_bytes(&self.public_key)
            .map_err(|e| AuthError::InvalidKey(e.to_string()))?;
        let signature = Signature::from_bytes(&self.signature);
        key.verify_strict(message, &signature)
            .map_err(|e| AuthError::InvalidSignature(e.to_string()))
    }

    pub fn signature_hex(&self) -> String {
        move_txn_types::encoding::to_hex_literal(&self.signature)
    }
}

/// Sign arbitrary bytes. Ed25519 signing is deterministic.
pub fn sign(key: &SigningKey, message: &[u8]) -> SingleSignature {
    let signature = key.sign(message);
    SingleSignature::new(&key.verifying_key(), &signature)
}

/// Sign the transaction's signing message (domain prefix included).
pub fn sign_transaction(
    key: &SigningKey,
    tx: &Transaction,
) -> Result<SingleSignature, AuthError> {
    let message = tx.signing_message()?;
    debug!(
        sender = %tx.sender,
        sequence_number = tx.sequence_number,
        "signing transaction"
    );
    Ok(sign(key, &message))
}

/// A signature that passes shape checks but not verification, for simulation.
pub fn simulation_signature(public_key: &VerifyingKey) -> SingleSignature {
    SingleSignature {
        scheme: SignatureScheme::Ed25519,
        public_key: public_key.to_bytes(),
        signature: [0u8; SIGNATURE_LENGTH],
    }
}

/// Fixed-size byte arrays as `0x`-prefixed hex.
mod prefixed_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    use move_txn_types::encoding::{parse_hex_array, to_hex_literal};

    pub fn serialize<S: Serializer, const N: usize>(
        value: &[u8; N],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_hex_literal(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>, const N: usize>(
        deserializer: D,
    ) -> Result<[u8; N], D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_hex_array::<N>(&s).map_err(serde::de::Error::custom)
    }
}
