//! # Demo Node Wiring
//!
//! Builds a complete in-process ledger (roles, settlement, bridge,
//! relay, validator quorum) and drives one end-to-end flow through it.
//! Everything is deterministic so the run doubles as a smoke test.

use anyhow::{Context, Result};
use sc_01_role_registry::RoleRegistry;
use sc_02_invoice_settlement::SettlementEngine;
use sc_03_bridge_ledger::{release_message, BridgeConfig, BridgeLedger};
use sc_04_message_relay::{relay_quorum_message, MessageRelay};
use sc_05_signature_verification::test_helpers::{sign_approval, validator_pairs};
use sc_05_signature_verification::{ThresholdVerifier, ValidatorSet};
use shared_types::{
    AccountId, BalanceLedger, ChainId, InMemoryAccountBook, LedgerEvent, Role, ShipmentStatus,
    SignedApproval, Timestamp, NATIVE_TOKEN,
};
use tracing::info;

const ADMIN: AccountId = [0x01; 20];
const SUPPLIER: AccountId = [0x02; 20];
const BUYER: AccountId = [0x03; 20];
const FINANCIER: AccountId = [0x04; 20];
const OPERATOR: AccountId = [0x05; 20];
const VAULT: AccountId = [0x06; 20];
const REMOTE_RECIPIENT: AccountId = [0x07; 20];

/// All ledger components wired together in one process.
pub struct DemoLedger {
    registry: RoleRegistry,
    settlement: SettlementEngine,
    bridge: BridgeLedger,
    relay: MessageRelay,
    verifier: ThresholdVerifier,
    book: InMemoryAccountBook,
}

impl DemoLedger {
    /// Bootstrap roles, seed balances, and stand up a 2-of-3 validator
    /// quorum.
    pub fn bootstrap() -> Result<Self> {
        let mut registry = RoleRegistry::bootstrap(ADMIN);
        registry.grant(&ADMIN, SUPPLIER, Role::Supplier)?;
        registry.grant(&ADMIN, BUYER, Role::Buyer)?;
        registry.grant(&ADMIN, FINANCIER, Role::Financier)?;
        registry.grant(&ADMIN, OPERATOR, Role::Operator)?;

        let mut book = InMemoryAccountBook::new();
        book.deposit(NATIVE_TOKEN, &BUYER, 50_000)
            .context("seeding buyer balance")?;
        book.deposit(NATIVE_TOKEN, &FINANCIER, 50_000)
            .context("seeding financier balance")?;

        let set = ValidatorSet::new(validator_pairs(3), 2).context("building validator set")?;
        let verifier = ThresholdVerifier::new(set);

        Ok(Self {
            registry,
            settlement: SettlementEngine::new(),
            bridge: BridgeLedger::new(BridgeConfig::new(VAULT, OPERATOR)),
            relay: MessageRelay::new(),
            verifier,
            book,
        })
    }

    /// Drive one settlement, one bridge round-trip, and one relayed
    /// message. Returns every event the components emitted, in order.
    pub fn run_demo_flow(&mut self, now: Timestamp) -> Result<Vec<LedgerEvent>> {
        info!("--- invoice settlement flow ---");
        let invoice_id = self.settlement.create_invoice(
            &self.registry,
            &SUPPLIER,
            SUPPLIER,
            BUYER,
            12_000,
            now + 30 * 86_400,
        )?;
        let shipment_id = self.settlement.create_shipment(
            &self.registry,
            &SUPPLIER,
            SUPPLIER,
            BUYER,
            "PALLET-7745".to_string(),
            40,
            now,
        )?;
        self.settlement.update_shipment_status(
            &self.registry,
            &OPERATOR,
            shipment_id,
            ShipmentStatus::InTransit,
        )?;
        self.settlement.finance_invoice(
            &self.registry,
            &mut self.book,
            &FINANCIER,
            invoice_id,
            9_000,
        )?;
        self.settlement.update_shipment_status(
            &self.registry,
            &OPERATOR,
            shipment_id,
            ShipmentStatus::Delivered,
        )?;
        self.settlement
            .pay_invoice(&mut self.book, &BUYER, invoice_id)?;
        info!(
            invoice_id,
            financier_balance = self.book.balance_of(NATIVE_TOKEN, &FINANCIER),
            supplier_balance = self.book.balance_of(NATIVE_TOKEN, &SUPPLIER),
            "invoice settled"
        );

        info!("--- bridge round-trip ---");
        let transfer_id = self.bridge.lock(
            &mut self.book,
            &SUPPLIER,
            ChainId::Ethereum,
            NATIVE_TOKEN,
            2_000,
            REMOTE_RECIPIENT,
            self.bridge.config().bridge_fee,
            now,
        )?;
        let message = release_message(
            ChainId::SettleNet,
            transfer_id,
            &NATIVE_TOKEN,
            2_000,
            &REMOTE_RECIPIENT,
        );
        let approvals = quorum_signatures(&message);
        self.bridge.release(
            &mut self.book,
            &self.verifier,
            ChainId::SettleNet,
            transfer_id,
            NATIVE_TOKEN,
            2_000,
            REMOTE_RECIPIENT,
            &approvals,
        )?;
        info!(transfer_id, "bridge transfer completed");

        info!("--- inbound message relay ---");
        let payload = b"ack:settlement-batch-1".to_vec();
        let message = relay_quorum_message(ChainId::Ethereum, &REMOTE_RECIPIENT, &payload);
        let approvals = quorum_signatures(&message);
        let message_id = self.relay.relay_message(
            &self.verifier,
            ChainId::Ethereum,
            &REMOTE_RECIPIENT,
            payload,
            &approvals,
            now,
        )?;
        info!(message_id = %shared_types::short_hex(&message_id), "message relayed");

        let mut events = self.registry.take_events();
        events.extend(self.settlement.take_events());
        events.extend(self.bridge.take_events());
        events.extend(self.relay.take_events());
        Ok(events)
    }
}

fn quorum_signatures(message: &[u8]) -> Vec<SignedApproval> {
    vec![sign_approval(1, message), sign_approval(2, message)]
}
