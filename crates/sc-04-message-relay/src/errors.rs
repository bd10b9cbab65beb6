//! # Relay Errors

use shared_types::Hash;
use thiserror::Error;

/// Message relay error types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RelayError {
    /// Message id was processed before (replay).
    #[error("message already processed: {}", shared_types::short_hex(.0))]
    AlreadyProcessed(Hash),

    /// Not enough distinct authorized validators signed the message.
    #[error("quorum not met: only {signers} distinct authorized signatures")]
    QuorumNotMet {
        /// Distinct authorized signers that did verify.
        signers: usize,
    },

    /// Empty payloads carry no instruction and are rejected.
    #[error("empty payload rejected")]
    EmptyPayload,
}
