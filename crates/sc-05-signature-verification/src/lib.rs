//! # SC-05: Signature Verification
//!
//! Ed25519 threshold verification for validator quorums.
//!
//! A [`ValidatorSet`] holds the authorized validator keys and the quorum
//! threshold; a [`ThresholdVerifier`] wraps one and answers quorum checks
//! for the bridge and relay: a check passes when at least `threshold`
//! DISTINCT authorized validators produced valid signatures over the
//! exact payload bytes. Duplicate approvals from one validator count
//! once; signatures from unknown keys count zero.
//!
//! ## Module Structure
//!
//! ```text
//! sc-05-signature-verification/
//! ├── lib.rs            (you are here)
//! ├── errors.rs         Validator set construction errors
//! ├── validator_set.rs  Authorized keys + threshold
//! ├── verifier.rs       ThresholdVerifier (QuorumVerifier impl)
//! └── test_helpers.rs   Deterministic keygen/signing for tests
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod test_helpers;
pub mod validator_set;
pub mod verifier;

pub use errors::ValidatorSetError;
pub use validator_set::{validator_account_id, ValidatorSet};
pub use verifier::ThresholdVerifier;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
