//! # Domain Invariants
//!
//! Business rules checked before any balance mutation.

use super::errors::SettlementError;
use shared_types::Amount;

/// Invariant: amounts entering the ledger are strictly positive.
pub fn invariant_positive_amount(amount: Amount) -> Result<(), SettlementError> {
    if amount == 0 {
        return Err(SettlementError::InvalidAmount(amount));
    }
    Ok(())
}

/// Invariant: financing bound.
///
/// An advance never exceeds the invoice face amount, so the buyer's single
/// full-face payment always covers the financier's outlay.
pub fn invariant_financing_bound(requested: Amount, face: Amount) -> Result<(), SettlementError> {
    if requested > face {
        return Err(SettlementError::AmountExceedsInvoice { requested, face });
    }
    Ok(())
}
