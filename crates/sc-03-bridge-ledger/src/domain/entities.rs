//! # Domain Entities
//!
//! Core entities for the bridge ledger.

use serde::{Deserialize, Serialize};
use shared_types::{AccountId, Amount, ChainId, Hash, Timestamp, TokenId};
use std::collections::BTreeSet;

/// A cross-ledger transfer. Created on lock, mutated exactly once (to
/// `completed = true`) on release. Never deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossChainTransfer {
    /// Monotonically increasing identifier.
    pub id: u64,
    /// Ledger the value was escrowed on.
    pub source_chain: ChainId,
    /// Ledger the value is destined for.
    pub target_chain: ChainId,
    /// Escrowed token.
    pub token: TokenId,
    /// Escrowed amount.
    pub amount: Amount,
    /// Escrowing account.
    pub sender: AccountId,
    /// Recipient on the target ledger.
    pub recipient: AccountId,
    /// Deterministic proof of the lock, derived from the transfer fields.
    pub proof_hash: Hash,
    /// Monotonic false → true; a completed transfer can never be released
    /// again through the normal path.
    pub completed: bool,
    /// Lock time, supplied by the caller.
    pub timestamp: Timestamp,
}

/// Bridge configuration. Admin operations mutate it in place and take
/// effect immediately for subsequent calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// The ledger this bridge instance runs on.
    pub local_chain: ChainId,
    /// Escrow account holding locked tokens.
    pub vault: AccountId,
    /// Account bridge fees are routed to.
    pub operator: AccountId,
    /// Fee in native tokens charged per lock.
    pub bridge_fee: Amount,
    /// Smallest lock amount accepted.
    pub min_transfer: Amount,
    /// Chains lock/release will accept.
    pub supported_chains: BTreeSet<ChainId>,
}

impl BridgeConfig {
    /// Configuration with every known chain supported and conservative
    /// starting parameters. Admin operations adjust them at runtime.
    pub fn new(vault: AccountId, operator: AccountId) -> Self {
        Self {
            local_chain: ChainId::SettleNet,
            vault,
            operator,
            bridge_fee: 10,
            min_transfer: 100,
            supported_chains: BTreeSet::from([
                ChainId::SettleNet,
                ChainId::Ethereum,
                ChainId::Polygon,
                ChainId::Arbitrum,
                ChainId::Bsc,
            ]),
        }
    }
}
