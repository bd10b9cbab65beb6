//! # Bridge Ledger Service
//!
//! Application service owning the escrow balances and transfer records.
//! Strictly serialized: one operation at a time, each atomic.
//!
//! `release` flips `completed` and decrements the escrow balance *before*
//! the outbound payout, so a reentrant call triggered by the payout
//! observes `completed = true` and is rejected by the ordinary replay
//! guard. A non-reentrant flag covers the same window independently of
//! that ordering. If the payout itself fails, the flags and balance are
//! restored before the error is returned.

use crate::domain::entities::{BridgeConfig, CrossChainTransfer};
use crate::domain::errors::BridgeError;
use crate::domain::invariants::{
    invariant_chain_supported, invariant_min_transfer, invariant_sufficient_fee,
};
use crate::domain::proof::{derive_proof_hash, release_message};
use shared_types::{
    short_hex, AccountId, Amount, BalanceLedger, ChainId, EventLog, LedgerEvent, QuorumVerifier,
    Role, RoleAuthority, SignedApproval, Timestamp, TokenId, NATIVE_TOKEN,
};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Bridge Ledger: lock/release accounting with per-(chain, token)
/// conservation.
#[derive(Clone, Debug)]
pub struct BridgeLedger {
    config: BridgeConfig,
    balances: BTreeMap<(ChainId, TokenId), Amount>,
    transfers: BTreeMap<u64, CrossChainTransfer>,
    next_transfer_id: u64,
    events: EventLog,
    in_flight: bool,
}

impl BridgeLedger {
    /// Create a bridge over the given configuration.
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            config,
            balances: BTreeMap::new(),
            transfers: BTreeMap::new(),
            next_transfer_id: 0,
            events: EventLog::new(),
            in_flight: false,
        }
    }

    /// Escrow `amount` of `token` for `recipient` on `target_chain`.
    ///
    /// Debits the caller, credits the vault, routes the fee to the
    /// operator, and records a `CrossChainTransfer` with a deterministic
    /// proof hash.
    #[allow(clippy::too_many_arguments)]
    pub fn lock(
        &mut self,
        book: &mut dyn BalanceLedger,
        caller: &AccountId,
        target_chain: ChainId,
        token: TokenId,
        amount: Amount,
        recipient: AccountId,
        fee_paid: Amount,
        now: Timestamp,
    ) -> Result<u64, BridgeError> {
        self.begin()?;
        let result =
            self.lock_inner(book, caller, target_chain, token, amount, recipient, fee_paid, now);
        self.end();
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn lock_inner(
        &mut self,
        book: &mut dyn BalanceLedger,
        caller: &AccountId,
        target_chain: ChainId,
        token: TokenId,
        amount: Amount,
        recipient: AccountId,
        fee_paid: Amount,
        now: Timestamp,
    ) -> Result<u64, BridgeError> {
        invariant_chain_supported(&self.config.supported_chains, target_chain)?;
        invariant_min_transfer(amount, self.config.min_transfer)?;
        invariant_sufficient_fee(fee_paid, self.config.bridge_fee)?;

        let local_chain = self.config.local_chain;
        let held = self.chain_balance(local_chain, token);
        let credited = held
            .checked_add(amount)
            .ok_or(BridgeError::BalanceOverflow { amount })?;

        // Escrow the tokens, then take the fee. Both are atomic; if the fee
        // fails the escrow is unwound, so the operation has no effect.
        let vault = self.config.vault;
        let operator = self.config.operator;
        book.transfer(token, caller, &vault, amount)?;
        if let Err(fee_err) = book.transfer(NATIVE_TOKEN, caller, &operator, fee_paid) {
            // The vault necessarily holds what was just escrowed.
            let _ = book.transfer(token, &vault, caller, amount);
            return Err(fee_err.into());
        }

        self.balances.insert((local_chain, token), credited);
        self.next_transfer_id += 1;
        let id = self.next_transfer_id;
        let proof_hash =
            derive_proof_hash(local_chain, target_chain, &token, amount, caller, &recipient, now);
        self.transfers.insert(
            id,
            CrossChainTransfer {
                id,
                source_chain: local_chain,
                target_chain,
                token,
                amount,
                sender: *caller,
                recipient,
                proof_hash,
                completed: false,
                timestamp: now,
            },
        );

        self.events.record(LedgerEvent::TokensLocked {
            transfer_id: id,
            target_chain,
            token,
            amount,
            sender: *caller,
            recipient,
            proof_hash,
        });
        info!(
            transfer_id = id,
            %target_chain,
            amount,
            proof = %short_hex(&proof_hash),
            "tokens locked"
        );
        Ok(id)
    }

    /// Pay out an escrowed transfer after quorum verification. Succeeds at
    /// most once per transfer id.
    #[allow(clippy::too_many_arguments)]
    pub fn release(
        &mut self,
        book: &mut dyn BalanceLedger,
        verifier: &dyn QuorumVerifier,
        source_chain: ChainId,
        transfer_id: u64,
        token: TokenId,
        amount: Amount,
        recipient: AccountId,
        approvals: &[SignedApproval],
    ) -> Result<(), BridgeError> {
        self.begin()?;
        let result = self.release_inner(
            book,
            verifier,
            source_chain,
            transfer_id,
            token,
            amount,
            recipient,
            approvals,
        );
        self.end();
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn release_inner(
        &mut self,
        book: &mut dyn BalanceLedger,
        verifier: &dyn QuorumVerifier,
        source_chain: ChainId,
        transfer_id: u64,
        token: TokenId,
        amount: Amount,
        recipient: AccountId,
        approvals: &[SignedApproval],
    ) -> Result<(), BridgeError> {
        invariant_chain_supported(&self.config.supported_chains, source_chain)?;

        let transfer = self
            .transfers
            .get(&transfer_id)
            .ok_or(BridgeError::TransferNotFound(transfer_id))?;
        if transfer.completed {
            return Err(BridgeError::AlreadyCompleted(transfer_id));
        }
        if transfer.source_chain != source_chain {
            return Err(BridgeError::FieldMismatch {
                field: "source_chain",
            });
        }
        if transfer.token != token {
            return Err(BridgeError::FieldMismatch { field: "token" });
        }
        if transfer.amount != amount {
            return Err(BridgeError::FieldMismatch { field: "amount" });
        }
        if transfer.recipient != recipient {
            return Err(BridgeError::FieldMismatch { field: "recipient" });
        }

        let message = release_message(source_chain, transfer_id, &token, amount, &recipient);
        let verdict = verifier.check_quorum(&message, approvals);
        if !verdict.satisfied {
            return Err(BridgeError::QuorumNotMet {
                signers: verdict.signers.len(),
            });
        }

        let local_chain = self.config.local_chain;
        let available = self.chain_balance(local_chain, token);
        if available < amount {
            return Err(BridgeError::InsufficientBridgeBalance {
                available,
                requested: amount,
            });
        }

        // Effects first: decrement escrow and mark completed before the
        // outbound payout, so a reentrant release sees `completed = true`.
        self.balances
            .insert((local_chain, token), available - amount);
        if let Some(transfer) = self.transfers.get_mut(&transfer_id) {
            transfer.completed = true;
        }

        let vault = self.config.vault;
        if let Err(transfer_err) = book.transfer(token, &vault, &recipient, amount) {
            self.balances.insert((local_chain, token), available);
            if let Some(transfer) = self.transfers.get_mut(&transfer_id) {
                transfer.completed = false;
            }
            return Err(transfer_err.into());
        }

        self.events.record(LedgerEvent::TokensReleased {
            transfer_id,
            source_chain,
            token,
            amount,
            recipient,
        });
        info!(
            transfer_id,
            %source_chain,
            amount,
            signers = verdict.signers.len(),
            "tokens released"
        );
        Ok(())
    }

    /// Set the bridge fee. Requires `Admin`; effective immediately.
    pub fn set_bridge_fee(
        &mut self,
        roles: &dyn RoleAuthority,
        caller: &AccountId,
        fee: Amount,
    ) -> Result<(), BridgeError> {
        self.require_role(roles, caller, Role::Admin)?;
        self.config.bridge_fee = fee;
        self.events.record(LedgerEvent::BridgeFeeUpdated { fee });
        info!(fee, "bridge fee updated");
        Ok(())
    }

    /// Set the minimum transfer size. Requires `Admin`; effective
    /// immediately.
    pub fn set_min_transfer(
        &mut self,
        roles: &dyn RoleAuthority,
        caller: &AccountId,
        min_transfer: Amount,
    ) -> Result<(), BridgeError> {
        self.require_role(roles, caller, Role::Admin)?;
        self.config.min_transfer = min_transfer;
        self.events
            .record(LedgerEvent::MinTransferUpdated { min_transfer });
        info!(min_transfer, "minimum transfer updated");
        Ok(())
    }

    /// Toggle support for a chain. Requires `Admin`; effective immediately.
    pub fn set_supported_chain(
        &mut self,
        roles: &dyn RoleAuthority,
        caller: &AccountId,
        chain: ChainId,
        supported: bool,
    ) -> Result<(), BridgeError> {
        self.require_role(roles, caller, Role::Admin)?;
        if supported {
            self.config.supported_chains.insert(chain);
        } else {
            self.config.supported_chains.remove(&chain);
        }
        self.events
            .record(LedgerEvent::ChainSupported { chain, supported });
        info!(%chain, supported, "chain support updated");
        Ok(())
    }

    /// Emergency escape hatch: drain escrow to an arbitrary account,
    /// bypassing transfer records and quorum checks. Requires `Admin`.
    /// Audited via a dedicated event; never part of the settlement path.
    pub fn emergency_withdraw(
        &mut self,
        roles: &dyn RoleAuthority,
        book: &mut dyn BalanceLedger,
        caller: &AccountId,
        chain: ChainId,
        token: TokenId,
        amount: Amount,
        to: AccountId,
    ) -> Result<(), BridgeError> {
        self.begin()?;
        let result = self.emergency_withdraw_inner(roles, book, caller, chain, token, amount, to);
        self.end();
        result
    }

    #[allow(clippy::too_many_arguments)]
    fn emergency_withdraw_inner(
        &mut self,
        roles: &dyn RoleAuthority,
        book: &mut dyn BalanceLedger,
        caller: &AccountId,
        chain: ChainId,
        token: TokenId,
        amount: Amount,
        to: AccountId,
    ) -> Result<(), BridgeError> {
        self.require_role(roles, caller, Role::Admin)?;

        let available = self.chain_balance(chain, token);
        let remaining = available
            .checked_sub(amount)
            .ok_or(BridgeError::InsufficientBridgeBalance {
                available,
                requested: amount,
            })?;

        self.balances.insert((chain, token), remaining);
        let vault = self.config.vault;
        if let Err(transfer_err) = book.transfer(token, &vault, &to, amount) {
            self.balances.insert((chain, token), available);
            return Err(transfer_err.into());
        }

        self.events.record(LedgerEvent::EmergencyWithdrawal {
            chain,
            token,
            amount,
            to,
        });
        warn!(%chain, amount, to = %short_hex(&to), "EMERGENCY withdrawal executed");
        Ok(())
    }

    /// Emergency escape hatch: force a transfer's completion flag in either
    /// direction, bypassing monotonicity. Requires `Admin`. Audited via a
    /// dedicated event.
    pub fn emergency_set_transfer_status(
        &mut self,
        roles: &dyn RoleAuthority,
        caller: &AccountId,
        transfer_id: u64,
        completed: bool,
    ) -> Result<(), BridgeError> {
        self.require_role(roles, caller, Role::Admin)?;

        let transfer = self
            .transfers
            .get_mut(&transfer_id)
            .ok_or(BridgeError::TransferNotFound(transfer_id))?;
        transfer.completed = completed;

        self.events.record(LedgerEvent::EmergencyTransferOverride {
            transfer_id,
            completed,
        });
        warn!(transfer_id, completed, "EMERGENCY transfer status override");
        Ok(())
    }

    /// Read a transfer snapshot.
    pub fn get_transfer(&self, transfer_id: u64) -> Result<&CrossChainTransfer, BridgeError> {
        self.transfers
            .get(&transfer_id)
            .ok_or(BridgeError::TransferNotFound(transfer_id))
    }

    /// Escrow currently held for `(chain, token)`.
    pub fn chain_balance(&self, chain: ChainId, token: TokenId) -> Amount {
        self.balances.get(&(chain, token)).copied().unwrap_or(0)
    }

    /// Current configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Events pending for the off-chain indexer.
    pub fn events(&self) -> &[LedgerEvent] {
        self.events.as_slice()
    }

    /// Drain pending events.
    pub fn take_events(&mut self) -> Vec<LedgerEvent> {
        self.events.drain()
    }

    fn require_role(
        &self,
        roles: &dyn RoleAuthority,
        caller: &AccountId,
        required: Role,
    ) -> Result<(), BridgeError> {
        if !roles.has_role(caller, required) {
            return Err(BridgeError::Unauthorized {
                caller: *caller,
                required,
            });
        }
        Ok(())
    }

    // Non-reentrant guard, independent of the effects-before-interactions
    // ordering.
    fn begin(&mut self) -> Result<(), BridgeError> {
        if self.in_flight {
            return Err(BridgeError::ReentrantCall);
        }
        self.in_flight = true;
        Ok(())
    }

    fn end(&mut self) {
        self.in_flight = false;
    }
}
