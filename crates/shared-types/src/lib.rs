//! # Shared Types Crate
//!
//! This crate contains all domain primitives, role/capability types, the
//! ledger event stream, and the collaborator port traits consumed by every
//! subsystem of the settlement core.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Closed capability model**: `Role` is a closed enum backed by a bitset;
//!   authorization is always a pure predicate lookup, never dispatch.
//! - **Explicit collaborators**: the balance primitive, role authority, and
//!   quorum verifier are traits passed into each operation; no subsystem
//!   reaches for ambient state.

pub mod account_book;
pub mod events;
pub mod ports;
pub mod primitives;
pub mod roles;
pub mod shipment;

pub use account_book::InMemoryAccountBook;
pub use events::{EventLog, LedgerEvent};
pub use ports::{
    BalanceLedger, QuorumVerdict, QuorumVerifier, RoleAuthority, SignedApproval, TransferError,
};
pub use primitives::{
    short_hex, AccountId, Amount, ChainId, Hash, Timestamp, TokenId, NATIVE_TOKEN,
};
pub use roles::{Role, RoleSet};
pub use shipment::ShipmentStatus;
