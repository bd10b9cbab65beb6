//! # Threshold Verifier
//!
//! [`QuorumVerifier`] implementation over a [`ValidatorSet`].

use crate::validator_set::ValidatorSet;
use ed25519_dalek::Signature;
use shared_types::{QuorumVerdict, QuorumVerifier, SignedApproval};
use std::collections::BTreeSet;
use tracing::debug;

/// Counts distinct authorized validators with valid signatures over the
/// payload and compares against the set's threshold.
///
/// Invalid signatures, unknown validators, and duplicate approvals do
/// not fail the check outright; they contribute nothing, and the verdict
/// falls out of what remains.
#[derive(Clone, Debug)]
pub struct ThresholdVerifier {
    set: ValidatorSet,
}

impl ThresholdVerifier {
    /// Verifier over the given validator set.
    pub fn new(set: ValidatorSet) -> Self {
        Self { set }
    }

    /// The underlying validator set.
    pub fn validator_set(&self) -> &ValidatorSet {
        &self.set
    }
}

impl QuorumVerifier for ThresholdVerifier {
    fn check_quorum(&self, message: &[u8], approvals: &[SignedApproval]) -> QuorumVerdict {
        let mut verified = BTreeSet::new();
        for approval in approvals {
            let Some(key) = self.set.key_of(&approval.validator) else {
                debug!("approval from unknown validator ignored");
                continue;
            };
            let signature = Signature::from_bytes(&approval.signature);
            if key.verify_strict(message, &signature).is_ok() {
                verified.insert(approval.validator);
            } else {
                debug!("invalid signature ignored");
            }
        }

        let signers: Vec<_> = verified.into_iter().collect();
        if signers.len() >= self.set.threshold() {
            QuorumVerdict::satisfied(signers)
        } else {
            QuorumVerdict::not_met(signers)
        }
    }
}
