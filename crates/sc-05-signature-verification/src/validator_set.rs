//! # Validator Set
//!
//! The authorized validator keys and the quorum threshold.

use crate::errors::ValidatorSetError;
use ed25519_dalek::VerifyingKey;
use sha2::{Digest, Sha256};
use shared_types::AccountId;
use std::collections::BTreeMap;

/// Derive a validator's ledger account id from its verifying key: the
/// first 20 bytes of the key's SHA-256 digest.
pub fn validator_account_id(key: &VerifyingKey) -> AccountId {
    let digest = Sha256::digest(key.as_bytes());
    let mut id = [0u8; 20];
    id.copy_from_slice(&digest[..20]);
    id
}

/// Authorized validator keys and the number of distinct signatures a
/// quorum requires. Immutable once built; rotating validators means
/// building a new set.
#[derive(Clone, Debug)]
pub struct ValidatorSet {
    keys: BTreeMap<AccountId, VerifyingKey>,
    threshold: usize,
}

impl ValidatorSet {
    /// Build a set from `(account, key)` pairs.
    ///
    /// Rejects a zero threshold, a threshold above the validator count,
    /// and duplicate accounts.
    pub fn new(
        validators: impl IntoIterator<Item = (AccountId, VerifyingKey)>,
        threshold: usize,
    ) -> Result<Self, ValidatorSetError> {
        if threshold == 0 {
            return Err(ValidatorSetError::ThresholdTooLow);
        }

        let mut keys = BTreeMap::new();
        for (account, key) in validators {
            if keys.insert(account, key).is_some() {
                return Err(ValidatorSetError::DuplicateValidator(account));
            }
        }
        if threshold > keys.len() {
            return Err(ValidatorSetError::ThresholdUnreachable {
                threshold,
                validators: keys.len(),
            });
        }

        Ok(Self { keys, threshold })
    }

    /// Build a set whose account ids are derived from the keys.
    pub fn from_keys(
        keys: impl IntoIterator<Item = VerifyingKey>,
        threshold: usize,
    ) -> Result<Self, ValidatorSetError> {
        Self::new(
            keys.into_iter().map(|k| (validator_account_id(&k), k)),
            threshold,
        )
    }

    /// Key registered for `account`, if any.
    pub fn key_of(&self, account: &AccountId) -> Option<&VerifyingKey> {
        self.keys.get(account)
    }

    /// Distinct signatures a quorum requires.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Number of authorized validators.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the set holds no validators.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
