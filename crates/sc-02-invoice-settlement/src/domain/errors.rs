//! # Domain Errors
//!
//! Error types for invoice settlement. Every error aborts the whole
//! operation with no partial state change.

use shared_types::{AccountId, Amount, Role, ShipmentStatus, TransferError};
use thiserror::Error;

/// Settlement error types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SettlementError {
    /// Caller does not hold the required capability.
    #[error("unauthorized: caller lacks the {required} capability")]
    Unauthorized {
        /// Account that attempted the operation.
        caller: AccountId,
        /// Capability the operation requires.
        required: Role,
    },

    /// Only the recorded buyer may pay an invoice.
    #[error("unauthorized: only the buyer of invoice {invoice_id} may pay it")]
    NotInvoiceBuyer {
        /// Account that attempted payment.
        caller: AccountId,
        /// Invoice it tried to pay.
        invoice_id: u64,
    },

    /// Unknown invoice id.
    #[error("invoice not found: {0}")]
    InvoiceNotFound(u64),

    /// Unknown shipment id.
    #[error("shipment not found: {0}")]
    ShipmentNotFound(u64),

    /// Invoice already settled (`paid` is monotonic).
    #[error("invalid state transition: invoice {0} already paid")]
    AlreadyPaid(u64),

    /// Invoice already carries an advance (`financed` is monotonic).
    #[error("invalid state transition: invoice {0} already financed")]
    AlreadyFinanced(u64),

    /// Advance above the face amount.
    #[error("financing amount {requested} exceeds invoice face amount {face}")]
    AmountExceedsInvoice {
        /// Requested advance.
        requested: Amount,
        /// Invoice face amount.
        face: Amount,
    },

    /// Zero or otherwise unusable amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(Amount),

    /// Shipment status transition the state machine forbids.
    #[error("invalid shipment transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: ShipmentStatus,
        /// Attempted status.
        to: ShipmentStatus,
    },

    /// The balance primitive refused to move funds.
    #[error("transfer failed: {0}")]
    Transfer(#[from] TransferError),

    /// Nested call into an operation already in flight.
    #[error("reentrant call rejected")]
    ReentrantCall,
}
