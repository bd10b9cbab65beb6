//! # Test Helpers
//!
//! Deterministic validator keys and approval signing. Compiled into the
//! library so the integration suite and the demo node can build real
//! quorums without carrying their own key plumbing. Never use these
//! keys outside tests and demos: the seeds are public.

use crate::validator_set::validator_account_id;
use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use shared_types::{AccountId, SignedApproval};

/// Deterministic validator derived from a one-byte seed. The same seed
/// always yields the same key pair.
pub fn deterministic_validator(seed: u8) -> (AccountId, VerifyingKey, SigningKey) {
    let signing = SigningKey::from_bytes(&[seed; 32]);
    let verifying = signing.verifying_key();
    (validator_account_id(&verifying), verifying, signing)
}

/// Approval by the validator with the given seed over `message`.
pub fn sign_approval(seed: u8, message: &[u8]) -> SignedApproval {
    let (account, _, signing) = deterministic_validator(seed);
    let signature: Signature = signing.sign(message);
    SignedApproval {
        validator: account,
        signature: signature.to_bytes(),
    }
}

/// Validator set input for seeds `1..=n`.
pub fn validator_pairs(n: u8) -> Vec<(AccountId, VerifyingKey)> {
    (1..=n)
        .map(|seed| {
            let (account, key, _) = deterministic_validator(seed);
            (account, key)
        })
        .collect()
}
