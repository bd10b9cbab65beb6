//! # SC-02 Invoice Settlement Engine
//!
//! Invoice and shipment-record lifecycle for supply-chain financing.
//!
//! **Subsystem ID:** 02
//! **Architecture:** Hexagonal (domain + service)
//!
//! ## Purpose
//!
//! Owns the receivables ledger:
//! - Invoice state machine `Created → {Financed} → Paid` (terminal)
//! - Full-recourse payment routing: the buyer always pays the full face
//!   amount, and whoever funded early is the one reimbursed
//! - Shipment records `Created → InTransit → {Delivered, Exception}`
//!
//! ## Module Structure
//!
//! ```text
//! sc-02-invoice-settlement/
//! ├── domain/          # Invoice, ShipmentRecord, errors, invariants
//! └── service.rs       # SettlementEngine operations
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod service;

// Re-exports
pub use domain::{
    invariant_financing_bound, invariant_positive_amount, Invoice, SettlementError, ShipmentRecord,
};
pub use service::SettlementEngine;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
