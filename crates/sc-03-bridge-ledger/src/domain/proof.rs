//! # Proof Derivation
//!
//! Deterministic hashing for lock proofs and release quorum payloads.
//! Fixed-width big-endian field encodings under distinct domain prefixes,
//! so no two payload kinds can collide.

use sha2::{Digest, Sha256};
use shared_types::{AccountId, Amount, ChainId, Hash, Timestamp, TokenId};

const LOCK_PROOF_DOMAIN: &[u8] = b"sc-bridge/lock-proof/v1";
const RELEASE_MSG_DOMAIN: &[u8] = b"sc-bridge/release/v1";

/// Derive the proof hash recorded at lock time.
#[allow(clippy::too_many_arguments)]
pub fn derive_proof_hash(
    source_chain: ChainId,
    target_chain: ChainId,
    token: &TokenId,
    amount: Amount,
    sender: &AccountId,
    recipient: &AccountId,
    timestamp: Timestamp,
) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(LOCK_PROOF_DOMAIN);
    hasher.update([source_chain.tag(), target_chain.tag()]);
    hasher.update(token);
    hasher.update(amount.to_be_bytes());
    hasher.update(sender);
    hasher.update(recipient);
    hasher.update(timestamp.to_be_bytes());
    hasher.finalize().into()
}

/// Canonical byte payload validators sign to authorize a release.
pub fn release_message(
    source_chain: ChainId,
    transfer_id: u64,
    token: &TokenId,
    amount: Amount,
    recipient: &AccountId,
) -> Vec<u8> {
    let mut message =
        Vec::with_capacity(RELEASE_MSG_DOMAIN.len() + 1 + 8 + token.len() + 16 + recipient.len());
    message.extend_from_slice(RELEASE_MSG_DOMAIN);
    message.push(source_chain.tag());
    message.extend_from_slice(&transfer_id.to_be_bytes());
    message.extend_from_slice(token);
    message.extend_from_slice(&amount.to_be_bytes());
    message.extend_from_slice(recipient);
    message
}
