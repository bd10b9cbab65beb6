//! # SC-04: Message Relay
//!
//! Quorum-gated inbound message channel with exactly-once processing.
//!
//! Arbitrary byte payloads originating on a remote ledger are admitted
//! here after the validator quorum vouches for them. Each message is
//! identified by a deterministic content hash; a message id is processed
//! at most once, ever, because the processed map only grows.
//!
//! ## Module Structure
//!
//! ```text
//! sc-04-message-relay/
//! ├── lib.rs      (you are here)
//! ├── errors.rs   Relay error types
//! └── relay.rs    MessageRelay service and id derivation
//! ```
//!
//! The crate is small enough that the flat layout beats a nested
//! domain/ports split.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod relay;

pub use errors::RelayError;
pub use relay::{derive_message_id, relay_quorum_message, MessageRelay, RelayedMessage};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
