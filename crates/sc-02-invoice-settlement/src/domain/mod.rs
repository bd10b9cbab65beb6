//! # Settlement Domain
//!
//! Entities, errors, and invariants for invoice settlement.

pub mod entities;
pub mod errors;
pub mod invariants;

pub use entities::{Invoice, ShipmentRecord};
pub use errors::SettlementError;
pub use invariants::{invariant_financing_bound, invariant_positive_amount};
