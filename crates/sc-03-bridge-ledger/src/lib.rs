//! # SC-03 Bridge Ledger
//!
//! Lock/release escrow accounting for moving token balances between
//! independent ledgers.
//!
//! **Subsystem ID:** 03
//! **Architecture:** Hexagonal (domain + service)
//!
//! ## Purpose
//!
//! Owns the cross-ledger value movement:
//! - `lock` escrows tokens on the local ledger and records a transfer with
//!   a deterministic proof hash
//! - `release` pays out escrow after a validator quorum certifies the
//!   transfer, exactly once per transfer id
//! - per-(chain, token) conservation: locked − released == held balance
//!
//! ## Security Properties
//!
//! | Defense | Description |
//! |---------|-------------|
//! | Replay protection | `completed` is monotonic false → true |
//! | Effects before interactions | flags flip before the outbound payout |
//! | Non-reentrant guard | nested calls rejected independently of ordering |
//! | Quorum gate | release requires ≥ threshold distinct validator signatures |
//!
//! ## Module Structure
//!
//! ```text
//! sc-03-bridge-ledger/
//! ├── domain/          # CrossChainTransfer, BridgeConfig, proof hashing,
//! │                    # errors, invariants
//! └── service.rs       # BridgeLedger operations
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod service;

// Re-exports
pub use domain::{
    derive_proof_hash, invariant_chain_supported, invariant_min_transfer,
    invariant_sufficient_fee, release_message, BridgeConfig, BridgeError, CrossChainTransfer,
};
pub use service::BridgeLedger;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
