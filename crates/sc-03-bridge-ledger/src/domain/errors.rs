//! # Domain Errors
//!
//! Error types for the bridge ledger. Every error aborts the whole
//! operation with no partial state change; none is process-fatal.

use shared_types::{AccountId, Amount, ChainId, Role, TransferError};
use thiserror::Error;

/// Bridge error types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// Caller does not hold the required capability.
    #[error("unauthorized: caller lacks the {required} capability")]
    Unauthorized {
        /// Account that attempted the operation.
        caller: AccountId,
        /// Capability the operation requires.
        required: Role,
    },

    /// Chain not in the supported set.
    #[error("unsupported chain: {0}")]
    UnsupportedChain(ChainId),

    /// Lock amount under the configured minimum.
    #[error("amount {amount} below minimum transfer {min_transfer}")]
    BelowMinimum {
        /// Requested lock amount.
        amount: Amount,
        /// Configured minimum.
        min_transfer: Amount,
    },

    /// Fee attached to the lock is too small.
    #[error("insufficient fee: paid {paid}, bridge fee is {required}")]
    InsufficientFee {
        /// Fee the caller attached.
        paid: Amount,
        /// Configured bridge fee.
        required: Amount,
    },

    /// Unknown transfer id.
    #[error("transfer not found: {0}")]
    TransferNotFound(u64),

    /// Transfer already released (replay).
    #[error("transfer {0} already completed")]
    AlreadyCompleted(u64),

    /// A release parameter disagrees with the stored transfer.
    #[error("field mismatch: {field} does not match stored transfer")]
    FieldMismatch {
        /// Name of the first mismatching field.
        field: &'static str,
    },

    /// Not enough distinct authorized validators signed.
    #[error("quorum not met: only {signers} distinct authorized signatures")]
    QuorumNotMet {
        /// Distinct authorized signers that did verify.
        signers: usize,
    },

    /// Escrow balance under the requested payout.
    #[error("insufficient bridge balance: have {available}, need {requested}")]
    InsufficientBridgeBalance {
        /// Escrow currently held for (chain, token).
        available: Amount,
        /// Requested payout.
        requested: Amount,
    },

    /// Escrow balance would overflow.
    #[error("bridge balance overflow on credit of {amount}")]
    BalanceOverflow {
        /// Amount whose credit overflowed.
        amount: Amount,
    },

    /// The balance primitive refused to move funds.
    #[error("transfer failed: {0}")]
    Transfer(#[from] TransferError),

    /// Nested call into an operation already in flight.
    #[error("reentrant call rejected")]
    ReentrantCall,
}
