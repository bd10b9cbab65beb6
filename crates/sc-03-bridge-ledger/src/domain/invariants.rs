//! # Domain Invariants
//!
//! Admission rules checked before any balance movement.

use super::errors::BridgeError;
use shared_types::{Amount, ChainId};
use std::collections::BTreeSet;

/// Invariant: only configured chains participate in lock/release.
pub fn invariant_chain_supported(
    supported: &BTreeSet<ChainId>,
    chain: ChainId,
) -> Result<(), BridgeError> {
    if !supported.contains(&chain) {
        return Err(BridgeError::UnsupportedChain(chain));
    }
    Ok(())
}

/// Invariant: locks respect the configured minimum transfer size.
pub fn invariant_min_transfer(amount: Amount, min_transfer: Amount) -> Result<(), BridgeError> {
    if amount < min_transfer {
        return Err(BridgeError::BelowMinimum {
            amount,
            min_transfer,
        });
    }
    Ok(())
}

/// Invariant: the attached fee covers the configured bridge fee.
pub fn invariant_sufficient_fee(paid: Amount, required: Amount) -> Result<(), BridgeError> {
    if paid < required {
        return Err(BridgeError::InsufficientFee { paid, required });
    }
    Ok(())
}
