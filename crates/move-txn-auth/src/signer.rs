//! Signing traits.

use move_txn_types::{Address, Transaction};

use crate::account::LocalAccount;
use crate::error::AuthError;
use crate::signature::{self, SingleSignature};

/// Signs transactions on behalf of one account.
pub trait TransactionSigner {
    fn signer_address(&self) -> Address;

    fn sign_transaction(&self, tx: &Transaction) -> Result<SingleSignature, AuthError>;

    /// Placeholder signature accepted by simulation endpoints.
    fn sign_transaction_for_simulation(
        &self,
        tx: &Transaction,
    ) -> Result<SingleSignature, AuthError>;
}

/// Signs arbitrary bytes. Prefer [`TransactionSigner`] for transactions.
pub trait RawDataSigner {
    fn sign_raw_data(&self, message: &[u8]) -> SingleSignature;

    fn sign_raw_data_for_simulation(&self, message: &[u8]) -> SingleSignature;
}

impl LocalAccount {
    fn check_sender(&self, tx: &Transaction) -> Result<(), AuthError> {
        if tx.sender != self.address() {
            return Err(AuthError::SenderMismatch {
                sender: tx.sender,
                signer: self.address(),
            });
        }
        Ok(())
    }
}

impl TransactionSigner for LocalAccount {
    fn signer_address(&self) -> Address {
        self.address()
    }

    fn sign_transaction(&self, tx: &Transaction) -> Result<SingleSignature, AuthError> {
        self.check_sender(tx)?;
        signature::sign_transaction(self.signing_key(), tx)
    }

    fn sign_transaction_for_simulation(
        &self,
        tx: &Transaction,
    ) -> Result<SingleSignature, AuthError> {
        self.check_sender(tx)?;
        Ok(signature::simulation_signature(&self.public_key()))
    }
}

impl RawDataSigner for LocalAccount {
    fn sign_raw_data(&self, message: &[u8]) -> SingleSignature {
        signature::sign(self.signing_key(), message)
    }

    fn sign_raw_data_for_simulation(&self, _message: &[u8]) -> SingleSignature {
        signature::simulation_signature(&self.public_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use move_txn_types::{ArgumentValue, EntryFunctionPayload};

    fn account() -> LocalAccount {
        LocalAccount::from_private_key_hex(
            "2b248dee740ee1e8d271afb89590554cd9655ee9fae8a0ec616b95911834eb49",
        )
        .unwrap()
    }

    fn transfer_from(sender: Address) -> Transaction {
        let mut tx = Transaction::new(EntryFunctionPayload::new(
            "0x1::aptos_account::transfer".parse().unwrap(),
            vec![],
            vec![ArgumentValue::Address(Address::ONE), ArgumentValue::U64(1)],
        ));
        tx.sender = sender;
        tx.chain_id = 2;
        tx
    }

    #[test]
    fn test_sign_own_transaction() {
        let account = account();
        let tx = transfer_from(account.address());
        let sig = account.sign_transaction(&tx).unwrap();
        sig.verify(&tx.signing_message().unwrap()).unwrap();
        assert_eq!(sig, account.sign_raw_data(&tx.signing_message().unwrap()));
    }

    #[test]
    fn test_refuses_foreign_sender() {
        let account = account();
        let tx = transfer_from(Address::ONE);
        assert_eq!(
            account.sign_transaction(&tx),
            Err(AuthError::SenderMismatch {
                sender: Address::ONE,
                signer: account.address(),
            })
        );
        assert!(account.sign_transaction_for_simulation(&tx).is_err());
    }

    #[test]
    fn test_simulation() {
        let account = account();
        let tx = transfer_from(account.address());
        let sig = account.sign_transaction_for_simulation(&tx).unwrap();
        assert!(sig.is_simulation());
        assert_eq!(sig.public_key, account.public_key().to_bytes());
        assert!(account.sign_raw_data_for_simulation(b"x").is_simulation());
    }

    #[test]
    fn test_usable_as_trait_object() {
        let account = account();
        let signer: &dyn TransactionSigner = &account;
        assert_eq!(signer.signer_address(), account.address());
    }
}
