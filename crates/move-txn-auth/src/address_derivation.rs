//! Account and resource address derivation.
//!
//! An account address is the SHA3-256 authentication key of its scheme:
//! - single Ed25519 key: `pk || 0x00`
//! - K-of-N multi-Ed25519: `pk_1 || … || pk_n || K || 0x01`
//! - resource account: `parent || seed || 0xFF`

use ed25519_dalek::VerifyingKey;
use tracing::debug;

use move_txn_types::encoding::sha3_256;
use move_txn_types::Address;

use crate::error::AuthError;

pub const ED25519_SCHEME: u8 = 0x00;
pub const MULTI_ED25519_SCHEME: u8 = 0x01;
pub const DERIVE_RESOURCE_ACCOUNT_SCHEME: u8 = 0xFF;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationScheme {
    Ed25519(VerifyingKey),
    MultiEd25519 {
        public_keys: Vec<VerifyingKey>,
        required: u8,
    },
}

pub fn derive_account_address(scheme: &AuthenticationScheme) -> Result<Address, AuthError> {
    match scheme {
        AuthenticationScheme::Ed25519(key) => Ok(ed25519_address(key)),
        AuthenticationScheme::MultiEd25519 {
            public_keys,
            required,
        } => {
            if public_keys.is_empty() || *required == 0 {
                return Err(AuthError::NoSigners);
            }
            if usize::from(*required) > public_keys.len() {
                return Err(AuthError::RequiredSignersExceedKeys {
                    required: usize::from(*required),
                    keys: public_keys.len(),
                });
            }
            let mut material = Vec::with_capacity(public_keys.len() * 32 + 2);
            for key in public_keys {
                material.extend_from_slice(key.as_bytes());
            }
            material.push(*required);
            material.push(MULTI_ED25519_SCHEME);
            debug!(
                keys = public_keys.len(),
                required, "derived multi-key account address"
            );
            Ok(Address::new(sha3_256(&[material.as_slice()])))
        }
    }
}

/// Address of the single-key account for `key`.
pub fn ed25519_address(key: &VerifyingKey) -> Address {
    Address::new(sha3_256(&[key.as_bytes().as_slice(), &[ED25519_SCHEME][..]]))
}

/// Authentication key for `total` signers of which `required` must sign.
///
/// A single signer always uses the single-key scheme.
pub fn generate_authentication_key(
    total: usize,
    required: u8,
    public_keys: &[VerifyingKey],
) -> Result<Address, AuthError> {
    if public_keys.len() != total {
        return Err(AuthError::KeyCountMismatch {
            expected: total,
            found: public_keys.len(),
        });
    }
    match public_keys {
        [] => Err(AuthError::NoSigners),
        [key] if required <= 1 => Ok(ed25519_address(key)),
        _ => derive_account_address(&AuthenticationScheme::MultiEd25519 {
            public_keys: public_keys.to_vec(),
            required,
        }),
    }
}

/// Address of a resource account created by `parent` with `seed`.
pub fn derive_resource_address(parent: &Address, seed: &[u8]) -> Address {
    Address::new(sha3_256(&[
        parent.as_bytes().as_slice(),
        seed,
        &[DERIVE_RESOURCE_ACCOUNT_SCHEME][..],
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PK_C: &str = "ff0ef0e5910c05c24551f135485a1fcb3bced53e20996bd26bfc23aa8816756c";
    const PK_D: &str = "7fc96f683e07a76bac1db4dd5a5c16060f54cead4f14e9e1099b1cc3658067a3";

    fn key(hex_str: &str) -> VerifyingKey {
        let bytes: [u8; 32] = hex::decode(hex_str).unwrap().try_into().unwrap();
        VerifyingKey::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn test_single_key() {
        let address = derive_account_address(&AuthenticationScheme::Ed25519(key(PK_C))).unwrap();
        assert_eq!(
            address.to_string(),
            "0x767b7442b8547fa5cf50989b9b761760ca6687b83d1c23d3589a5ac8acb50639"
        );
    }

    #[test]
    fn test_multi_key() {
        let keys = vec![key(PK_C), key(PK_D)];
        let one_of_two = derive_account_address(&AuthenticationScheme::MultiEd25519 {
            public_keys: keys.clone(),
            required: 1,
        })
        .unwrap();
        assert_eq!(
            one_of_two.to_string(),
            "0x1986b1bb7894bd7c264c9d90b8e1018943def3cc62a935e2ca08fec6dd01e1cb"
        );
        let two_of_two = generate_authentication_key(2, 2, &keys).unwrap();
        assert_eq!(
            two_of_two.to_string(),
            "0x052259a380385515f37ae6ffcb4ce3952aa732e67e3d68c5c7bc0aabdd401307"
        );
    }

    #[test]
    fn test_multi_key_errors() {
        let keys = vec![key(PK_C), key(PK_D)];
        assert_eq!(
            derive_account_address(&AuthenticationScheme::MultiEd25519 {
                public_keys: keys.clone(),
                required: 3,
            }),
            Err(AuthError::RequiredSignersExceedKeys {
                required: 3,
                keys: 2
            })
        );
        assert_eq!(
            derive_account_address(&AuthenticationScheme::MultiEd25519 {
                public_keys: keys.clone(),
                required: 0,
            }),
            Err(AuthError::NoSigners)
        );
        assert_eq!(
            derive_account_address(&AuthenticationScheme::MultiEd25519 {
                public_keys: vec![],
                required: 1,
            }),
            Err(AuthError::NoSigners)
        );
        assert_eq!(
            generate_authentication_key(3, 1, &keys),
            Err(AuthError::KeyCountMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_single_signer_uses_single_scheme() {
        let k = key(PK_C);
        assert_eq!(
            generate_authentication_key(1, 1, &[k]).unwrap(),
            derive_account_address(&AuthenticationScheme::Ed25519(k)).unwrap()
        );
    }

    #[test]
    fn test_resource_address() {
        let parent: Address = "0x767b7442b8547fa5cf50989b9b761760ca6687b83d1c23d3589a5ac8acb50639"
            .parse()
            .unwrap();
        assert_eq!(
            derive_resource_address(&parent, b"aux").to_string(),
            "0xf7729e5a04e960a8891761cbaab38f1c8185d48ebec4831da2aecc5f97f19b2b"
        );
    }
}
