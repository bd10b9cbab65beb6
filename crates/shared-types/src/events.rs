//! # Ledger Event Stream
//!
//! Every successful operation appends exactly one event (two for message
//! relay) to its engine's `EventLog`. Off-chain indexers drain the log;
//! nothing inside the core reads it back. A failed operation appends
//! nothing, so the log only ever reflects committed state.

use crate::primitives::{AccountId, Amount, ChainId, Hash, Timestamp, TokenId};
use crate::roles::Role;
use crate::shipment::ShipmentStatus;
use serde::{Deserialize, Serialize};

/// Event record emitted for external indexers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// A supplier registered a new invoice.
    InvoiceCreated {
        /// Invoice identifier.
        invoice_id: u64,
        /// Account owed.
        supplier: AccountId,
        /// Account owing.
        buyer: AccountId,
        /// Face amount.
        amount: Amount,
        /// Payment deadline.
        due_date: Timestamp,
    },
    /// A financier advanced funds against an invoice.
    InvoiceFinanced {
        /// Invoice identifier.
        invoice_id: u64,
        /// Account that advanced the funds.
        financier: AccountId,
        /// Advanced amount (≤ face amount).
        amount: Amount,
    },
    /// The buyer settled an invoice in full.
    InvoicePaid {
        /// Invoice identifier.
        invoice_id: u64,
        /// Paying account (the buyer).
        payer: AccountId,
        /// Account the face amount was routed to.
        beneficiary: AccountId,
        /// Face amount moved.
        amount: Amount,
    },
    /// A supplier registered a shipment.
    ShipmentCreated {
        /// Shipment identifier.
        shipment_id: u64,
        /// Shipping account.
        supplier: AccountId,
        /// Receiving account.
        buyer: AccountId,
        /// Product reference.
        product_id: String,
        /// Units shipped.
        quantity: Amount,
    },
    /// A shipment moved through its lifecycle.
    ShipmentUpdated {
        /// Shipment identifier.
        shipment_id: u64,
        /// New status.
        status: ShipmentStatus,
    },
    /// Tokens were escrowed for a cross-ledger transfer.
    TokensLocked {
        /// Transfer identifier.
        transfer_id: u64,
        /// Destination ledger.
        target_chain: ChainId,
        /// Token escrowed.
        token: TokenId,
        /// Escrowed amount.
        amount: Amount,
        /// Escrowing account.
        sender: AccountId,
        /// Recipient on the target ledger.
        recipient: AccountId,
        /// Deterministic transfer proof.
        proof_hash: Hash,
    },
    /// Escrowed tokens were paid out after quorum verification.
    TokensReleased {
        /// Transfer identifier.
        transfer_id: u64,
        /// Originating ledger.
        source_chain: ChainId,
        /// Token released.
        token: TokenId,
        /// Released amount.
        amount: Amount,
        /// Receiving account.
        recipient: AccountId,
    },
    /// A cross-ledger message passed quorum and was accepted.
    MessageRelayed {
        /// Content-derived message identifier.
        message_id: Hash,
        /// Originating ledger.
        source_chain: ChainId,
        /// Originating account.
        sender: AccountId,
    },
    /// A relayed message was marked processed (at most once per id).
    MessageProcessed {
        /// Content-derived message identifier.
        message_id: Hash,
    },
    /// Admin changed the bridge fee.
    BridgeFeeUpdated {
        /// New fee in native tokens.
        fee: Amount,
    },
    /// Admin changed the minimum transfer size.
    MinTransferUpdated {
        /// New minimum lock amount.
        min_transfer: Amount,
    },
    /// Admin toggled support for a chain.
    ChainSupported {
        /// Chain toggled.
        chain: ChainId,
        /// Whether the chain is now accepted.
        supported: bool,
    },
    /// Admin granted a capability.
    RoleGranted {
        /// Receiving account.
        account: AccountId,
        /// Capability granted.
        role: Role,
    },
    /// Admin revoked a capability.
    RoleRevoked {
        /// Affected account.
        account: AccountId,
        /// Capability revoked.
        role: Role,
    },
    /// Emergency escape hatch: admin drained escrowed funds.
    EmergencyWithdrawal {
        /// Chain whose escrow balance was drained.
        chain: ChainId,
        /// Token withdrawn.
        token: TokenId,
        /// Amount withdrawn.
        amount: Amount,
        /// Destination account.
        to: AccountId,
    },
    /// Emergency escape hatch: admin forced a transfer's completion flag.
    EmergencyTransferOverride {
        /// Transfer identifier.
        transfer_id: u64,
        /// Forced completion flag.
        completed: bool,
    },
}

/// Append-only event log owned by one engine.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    records: Vec<LedgerEvent>,
}

impl EventLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed event.
    pub fn record(&mut self, event: LedgerEvent) {
        self.records.push(event);
    }

    /// All events since the log was created or last drained.
    pub fn as_slice(&self) -> &[LedgerEvent] {
        &self.records
    }

    /// Hand the accumulated events to an indexer, emptying the log.
    pub fn drain(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.records)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no events are pending.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
