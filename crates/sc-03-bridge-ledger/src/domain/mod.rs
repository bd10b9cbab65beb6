//! # Bridge Domain
//!
//! Entities, proof derivation, errors, and invariants for the bridge.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod proof;

pub use entities::{BridgeConfig, CrossChainTransfer};
pub use errors::BridgeError;
pub use invariants::{invariant_chain_supported, invariant_min_transfer, invariant_sufficient_fee};
pub use proof::{derive_proof_hash, release_message};
