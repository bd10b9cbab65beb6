//! # Ledger Primitives
//!
//! Fundamental identifier and quantity types shared by all subsystems.

use serde::{Deserialize, Serialize};

/// Account identifier (20-byte address).
pub type AccountId = [u8; 20];

/// Content hash (32-byte SHA-256).
pub type Hash = [u8; 32];

/// Token identifier (20-byte asset address).
pub type TokenId = [u8; 20];

/// The native token of the local ledger.
pub const NATIVE_TOKEN: TokenId = [0u8; 20];

/// Monetary amount. u128 covers every token denomination in use.
pub type Amount = u128;

/// Unix timestamp in seconds, supplied explicitly by the caller of each
/// operation. The core never reads a clock of its own.
pub type Timestamp = u64;

/// Supported ledger identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChainId {
    /// SettleNet (the local ledger).
    SettleNet,
    /// Ethereum mainnet.
    Ethereum,
    /// Polygon PoS.
    Polygon,
    /// Arbitrum L2.
    Arbitrum,
    /// BNB Smart Chain.
    Bsc,
}

impl ChainId {
    /// Stable single-byte tag used in content hashing.
    pub fn tag(&self) -> u8 {
        match self {
            ChainId::SettleNet => 0,
            ChainId::Ethereum => 1,
            ChainId::Polygon => 2,
            ChainId::Arbitrum => 3,
            ChainId::Bsc => 4,
        }
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ChainId::SettleNet => "SettleNet",
            ChainId::Ethereum => "Ethereum",
            ChainId::Polygon => "Polygon",
            ChainId::Arbitrum => "Arbitrum",
            ChainId::Bsc => "BSC",
        };
        write!(f, "{name}")
    }
}

/// Abbreviated hex rendering for log output (first 4 bytes).
pub fn short_hex(bytes: &[u8]) -> String {
    let head = &bytes[..bytes.len().min(4)];
    format!("0x{}…", hex::encode(head))
}
