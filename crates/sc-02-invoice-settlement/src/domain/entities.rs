//! # Domain Entities
//!
//! Core entities for invoice settlement. Records are append-only: they are
//! created once and only their terminal flags move, never backwards.

use serde::{Deserialize, Serialize};
use shared_types::{AccountId, Amount, ShipmentStatus, Timestamp};

/// A receivable owed by a buyer to a supplier, optionally advanced early by
/// a financier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Monotonically increasing identifier.
    pub id: u64,
    /// Account owed.
    pub supplier: AccountId,
    /// Account owing.
    pub buyer: AccountId,
    /// Face amount, payable in full by the buyer.
    pub amount: Amount,
    /// Payment deadline.
    pub due_date: Timestamp,
    /// Monotonic false → true, flipped exactly once by payment.
    pub paid: bool,
    /// Whether a financier advanced funds.
    pub financed: bool,
    /// The financing account. `financed ⇒ financier.is_some()`.
    pub financier: Option<AccountId>,
    /// Advanced amount, 0 until financed. Always ≤ `amount`.
    pub financed_amount: Amount,
}

impl Invoice {
    /// Create a fresh, unpaid, unfinanced invoice.
    pub fn new(
        id: u64,
        supplier: AccountId,
        buyer: AccountId,
        amount: Amount,
        due_date: Timestamp,
    ) -> Self {
        Self {
            id,
            supplier,
            buyer,
            amount,
            due_date,
            paid: false,
            financed: false,
            financier: None,
            financed_amount: 0,
        }
    }

    /// Account the face amount is routed to on payment. Financing is a
    /// full-recourse advance: whoever funded early is reimbursed in full.
    pub fn beneficiary(&self) -> AccountId {
        match self.financier {
            Some(financier) if self.financed => financier,
            _ => self.supplier,
        }
    }
}

/// A shipment of goods backing a receivable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    /// Monotonically increasing identifier.
    pub id: u64,
    /// Shipping account.
    pub supplier: AccountId,
    /// Receiving account.
    pub buyer: AccountId,
    /// Product reference.
    pub product_id: String,
    /// Units shipped.
    pub quantity: Amount,
    /// Creation time, supplied by the caller.
    pub timestamp: Timestamp,
    /// Current lifecycle status.
    pub status: ShipmentStatus,
}

impl ShipmentRecord {
    /// Create a shipment in the `Created` state.
    pub fn new(
        id: u64,
        supplier: AccountId,
        buyer: AccountId,
        product_id: String,
        quantity: Amount,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            supplier,
            buyer,
            product_id,
            quantity,
            timestamp,
            status: ShipmentStatus::Created,
        }
    }
}
