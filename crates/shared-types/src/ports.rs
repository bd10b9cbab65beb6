//! # Collaborator Ports
//!
//! Traits for the external collaborators the settlement core consumes but
//! does not specify: the role authority, the atomic balance-transfer
//! primitive, and the signature quorum verifier. Engines receive
//! implementations as explicit arguments per operation.

use crate::primitives::{AccountId, Amount, TokenId};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use thiserror::Error;

/// Pure capability predicate consulted at the start of each operation.
pub trait RoleAuthority {
    /// Whether `account` currently holds `role`.
    fn has_role(&self, account: &AccountId, role: crate::roles::Role) -> bool;
}

/// Failure of the balance-transfer primitive. A failed transfer moves
/// nothing; partial application does not exist at this boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransferError {
    /// Debited account holds less than the requested amount.
    #[error("insufficient funds: have {available}, need {requested}")]
    InsufficientFunds {
        /// Balance currently held.
        available: Amount,
        /// Amount the operation tried to move.
        requested: Amount,
    },

    /// Credit would overflow the recipient's balance.
    #[error("balance overflow on credit of {amount}")]
    BalanceOverflow {
        /// Amount whose credit overflowed.
        amount: Amount,
    },
}

/// Atomic debit/credit primitive over per-(token, account) balances.
pub trait BalanceLedger {
    /// Move `amount` of `token` from `from` to `to`. Atomic: on error,
    /// neither balance changed.
    fn transfer(
        &mut self,
        token: TokenId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Current balance of `account` in `token`.
    fn balance_of(&self, token: TokenId, account: &AccountId) -> Amount;
}

/// One validator's signature over an operation payload.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedApproval {
    /// Claimed signing validator.
    pub validator: AccountId,
    /// Detached signature over the canonical payload bytes.
    #[serde_as(as = "Bytes")]
    pub signature: [u8; 64],
}

/// Outcome of a quorum check: a boolean verdict plus the distinct
/// authorized signers, kept for audit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuorumVerdict {
    /// Whether enough distinct authorized validators signed.
    pub satisfied: bool,
    /// Distinct authorized validators whose signatures verified.
    pub signers: Vec<AccountId>,
}

impl QuorumVerdict {
    /// Verdict for a satisfied quorum.
    pub fn satisfied(signers: Vec<AccountId>) -> Self {
        Self {
            satisfied: true,
            signers,
        }
    }

    /// Verdict for a failed quorum, retaining whichever signatures did
    /// verify.
    pub fn not_met(signers: Vec<AccountId>) -> Self {
        Self {
            satisfied: false,
            signers,
        }
    }
}

/// Signature quorum contract. Evaluated synchronously against data the
/// caller supplies in the same call; there is no pending-signatures state.
pub trait QuorumVerifier {
    /// Check whether `approvals` certify `message` with enough distinct
    /// authorized validators.
    fn check_quorum(&self, message: &[u8], approvals: &[SignedApproval]) -> QuorumVerdict;
}
