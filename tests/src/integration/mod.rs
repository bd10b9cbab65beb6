//! # Integration Tests
//!
//! Cross-component flows exercising the engines the way the demo node
//! wires them: real role registry, real account book, real ed25519
//! quorum.

pub mod bridge_flows;
pub mod relay_flows;
pub mod settlement_flows;
