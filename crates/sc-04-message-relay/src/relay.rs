//! # Message Relay Service
//!
//! Derives message ids, checks the validator quorum, and records each
//! message exactly once.

use crate::errors::RelayError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use shared_types::{
    short_hex, AccountId, ChainId, EventLog, Hash, LedgerEvent, QuorumVerifier, SignedApproval,
    Timestamp,
};
use std::collections::HashMap;
use tracing::info;

const MESSAGE_ID_DOMAIN: &[u8] = b"sc-relay/message-id/v1";
const RELAY_MSG_DOMAIN: &[u8] = b"sc-relay/approval/v1";

/// Deterministic message identifier over origin, sender, payload, and
/// relay time.
pub fn derive_message_id(
    source_chain: ChainId,
    sender: &AccountId,
    payload: &[u8],
    timestamp: Timestamp,
) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(MESSAGE_ID_DOMAIN);
    hasher.update([source_chain.tag()]);
    hasher.update(sender);
    hasher.update((payload.len() as u64).to_be_bytes());
    hasher.update(payload);
    hasher.update(timestamp.to_be_bytes());
    hasher.finalize().into()
}

/// Canonical byte payload validators sign to vouch for a message.
///
/// Deliberately excludes the relay timestamp: validators attest to the
/// message content and origin, not to when a relayer happens to submit it.
pub fn relay_quorum_message(source_chain: ChainId, sender: &AccountId, payload: &[u8]) -> Vec<u8> {
    let mut message =
        Vec::with_capacity(RELAY_MSG_DOMAIN.len() + 1 + sender.len() + 8 + payload.len());
    message.extend_from_slice(RELAY_MSG_DOMAIN);
    message.push(source_chain.tag());
    message.extend_from_slice(sender);
    message.extend_from_slice(&(payload.len() as u64).to_be_bytes());
    message.extend_from_slice(payload);
    message
}

/// A message admitted through the relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayedMessage {
    /// Content-derived identifier.
    pub id: Hash,
    /// Ledger the message originated on.
    pub source_chain: ChainId,
    /// Originating account on the source ledger.
    pub sender: AccountId,
    /// Opaque instruction bytes.
    pub payload: Vec<u8>,
    /// Relay time, supplied by the caller.
    pub timestamp: Timestamp,
    /// Always true once stored; the map never forgets an id.
    pub processed: bool,
}

/// Message relay: admits quorum-approved messages exactly once.
#[derive(Clone, Debug, Default)]
pub struct MessageRelay {
    relayed: HashMap<Hash, RelayedMessage>,
    events: EventLog,
}

impl MessageRelay {
    /// Empty relay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a message from `source_chain` if the validator quorum vouches
    /// for it and its id has never been processed.
    ///
    /// Returns the derived message id. The quorum is checked over the
    /// message content, so approvals cannot be spliced onto a different
    /// message.
    pub fn relay_message(
        &mut self,
        verifier: &dyn QuorumVerifier,
        source_chain: ChainId,
        sender: &AccountId,
        payload: Vec<u8>,
        approvals: &[SignedApproval],
        now: Timestamp,
    ) -> Result<Hash, RelayError> {
        if payload.is_empty() {
            return Err(RelayError::EmptyPayload);
        }

        let id = derive_message_id(source_chain, sender, &payload, now);
        if self.relayed.contains_key(&id) {
            return Err(RelayError::AlreadyProcessed(id));
        }

        let message = relay_quorum_message(source_chain, sender, &payload);
        let verdict = verifier.check_quorum(&message, approvals);
        if !verdict.satisfied {
            return Err(RelayError::QuorumNotMet {
                signers: verdict.signers.len(),
            });
        }

        self.relayed.insert(
            id,
            RelayedMessage {
                id,
                source_chain,
                sender: *sender,
                payload,
                timestamp: now,
                processed: true,
            },
        );

        self.events.record(LedgerEvent::MessageRelayed {
            message_id: id,
            source_chain,
            sender: *sender,
        });
        self.events
            .record(LedgerEvent::MessageProcessed { message_id: id });
        info!(
            message_id = %short_hex(&id),
            %source_chain,
            signers = verdict.signers.len(),
            "message relayed"
        );
        Ok(id)
    }

    /// Whether `message_id` has been processed.
    pub fn is_processed(&self, message_id: &Hash) -> bool {
        self.relayed
            .get(message_id)
            .map(|m| m.processed)
            .unwrap_or(false)
    }

    /// Read a relayed message.
    pub fn get_message(&self, message_id: &Hash) -> Option<&RelayedMessage> {
        self.relayed.get(message_id)
    }

    /// Number of messages admitted so far.
    pub fn len(&self) -> usize {
        self.relayed.len()
    }

    /// Whether no message has been admitted yet.
    pub fn is_empty(&self) -> bool {
        self.relayed.is_empty()
    }

    /// Events pending for the off-chain indexer.
    pub fn events(&self) -> &[LedgerEvent] {
        self.events.as_slice()
    }

    /// Drain pending events.
    pub fn take_events(&mut self) -> Vec<LedgerEvent> {
        self.events.drain()
    }
}
