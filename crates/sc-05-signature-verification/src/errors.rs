//! # Validator Set Errors

use shared_types::AccountId;
use thiserror::Error;

/// Errors building a validator set. Quorum checks themselves never
/// error; a bad signature simply does not count.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidatorSetError {
    /// A threshold of zero would let anything through.
    #[error("threshold must be at least 1")]
    ThresholdTooLow,

    /// A quorum nobody can reach.
    #[error("threshold {threshold} exceeds validator count {validators}")]
    ThresholdUnreachable {
        /// Requested threshold.
        threshold: usize,
        /// Validators in the set.
        validators: usize,
    },

    /// The same account registered twice.
    #[error("duplicate validator: {}", shared_types::short_hex(.0))]
    DuplicateValidator(AccountId),
}
