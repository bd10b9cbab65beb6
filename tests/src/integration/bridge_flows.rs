//! # Bridge Flows
//!
//! Lock/release round-trips with real ed25519 quorum signatures over
//! the canonical release payload.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use sc_03_bridge_ledger::{release_message, BridgeError};
    use shared_types::{BalanceLedger, ChainId, NATIVE_TOKEN};

    /// Lock then release: escrow is conserved and paid out exactly once.
    #[test]
    fn test_lock_release_round_trip() {
        let mut ledger = TestLedger::new();

        let transfer_id = ledger
            .bridge
            .lock(
                &mut ledger.book,
                &SUPPLIER,
                ChainId::Ethereum,
                WIDGET_TOKEN,
                2_000,
                RECIPIENT,
                10,
                1_000,
            )
            .unwrap();
        assert_eq!(ledger.book.balance_of(WIDGET_TOKEN, &VAULT), 2_000);
        assert_eq!(ledger.book.balance_of(NATIVE_TOKEN, &OPERATOR), 10);

        let message = release_message(
            ChainId::SettleNet,
            transfer_id,
            &WIDGET_TOKEN,
            2_000,
            &RECIPIENT,
        );
        ledger
            .bridge
            .release(
                &mut ledger.book,
                &ledger.verifier,
                ChainId::SettleNet,
                transfer_id,
                WIDGET_TOKEN,
                2_000,
                RECIPIENT,
                &quorum(&message),
            )
            .unwrap();

        assert_eq!(ledger.book.balance_of(WIDGET_TOKEN, &RECIPIENT), 2_000);
        assert_eq!(ledger.book.balance_of(WIDGET_TOKEN, &VAULT), 0);
        assert_eq!(
            ledger.bridge.chain_balance(ChainId::SettleNet, WIDGET_TOKEN),
            0
        );
    }

    /// One valid signature is not a quorum, even a perfectly valid one.
    #[test]
    fn test_release_below_threshold_rejected() {
        let mut ledger = TestLedger::new();
        let transfer_id = ledger
            .bridge
            .lock(
                &mut ledger.book,
                &SUPPLIER,
                ChainId::Ethereum,
                WIDGET_TOKEN,
                2_000,
                RECIPIENT,
                10,
                1_000,
            )
            .unwrap();

        let message = release_message(
            ChainId::SettleNet,
            transfer_id,
            &WIDGET_TOKEN,
            2_000,
            &RECIPIENT,
        );
        let err = ledger
            .bridge
            .release(
                &mut ledger.book,
                &ledger.verifier,
                ChainId::SettleNet,
                transfer_id,
                WIDGET_TOKEN,
                2_000,
                RECIPIENT,
                &below_quorum(&message),
            )
            .unwrap_err();
        assert!(matches!(err, BridgeError::QuorumNotMet { signers: 1 }));
        assert_eq!(ledger.book.balance_of(WIDGET_TOKEN, &RECIPIENT), 0);
    }

    /// Release parameters must match the stored transfer exactly;
    /// signatures over the *altered* parameters do not help.
    #[test]
    fn test_release_with_inflated_amount_rejected() {
        let mut ledger = TestLedger::new();
        let transfer_id = ledger
            .bridge
            .lock(
                &mut ledger.book,
                &SUPPLIER,
                ChainId::Ethereum,
                WIDGET_TOKEN,
                2_000,
                RECIPIENT,
                10,
                1_000,
            )
            .unwrap();

        // Quorum signs the inflated payload, so the signatures are valid;
        // the stored-transfer comparison is what stops the theft.
        let message = release_message(
            ChainId::SettleNet,
            transfer_id,
            &WIDGET_TOKEN,
            3_000,
            &RECIPIENT,
        );
        let err = ledger
            .bridge
            .release(
                &mut ledger.book,
                &ledger.verifier,
                ChainId::SettleNet,
                transfer_id,
                WIDGET_TOKEN,
                3_000,
                RECIPIENT,
                &quorum(&message),
            )
            .unwrap_err();
        assert!(matches!(err, BridgeError::FieldMismatch { field: "amount" }));
        assert_eq!(
            ledger.bridge.chain_balance(ChainId::SettleNet, WIDGET_TOKEN),
            2_000
        );
        assert!(!ledger.bridge.get_transfer(transfer_id).unwrap().completed);
    }

    /// Admin reconfiguration gates subsequent locks.
    #[test]
    fn test_admin_reconfiguration_applies_to_next_lock() {
        let mut ledger = TestLedger::new();
        ledger
            .bridge
            .set_min_transfer(&ledger.registry, &ADMIN, 5_000)
            .unwrap();

        let err = ledger
            .bridge
            .lock(
                &mut ledger.book,
                &SUPPLIER,
                ChainId::Ethereum,
                WIDGET_TOKEN,
                2_000,
                RECIPIENT,
                10,
                1_000,
            )
            .unwrap_err();
        assert!(matches!(err, BridgeError::BelowMinimum { .. }));
    }

    /// Emergency withdrawal drains escrow past the transfer records and
    /// leaves an audit event behind.
    #[test]
    fn test_emergency_withdraw_is_audited() {
        let mut ledger = TestLedger::new();
        ledger
            .bridge
            .lock(
                &mut ledger.book,
                &SUPPLIER,
                ChainId::Ethereum,
                WIDGET_TOKEN,
                2_000,
                RECIPIENT,
                10,
                1_000,
            )
            .unwrap();

        ledger
            .bridge
            .emergency_withdraw(
                &ledger.registry,
                &mut ledger.book,
                &ADMIN,
                ChainId::SettleNet,
                WIDGET_TOKEN,
                2_000,
                ADMIN,
            )
            .unwrap();

        assert_eq!(ledger.book.balance_of(WIDGET_TOKEN, &ADMIN), 2_000);
        assert_eq!(
            ledger.bridge.chain_balance(ChainId::SettleNet, WIDGET_TOKEN),
            0
        );
        assert!(ledger.bridge.events().iter().any(|e| matches!(
            e,
            shared_types::LedgerEvent::EmergencyWithdrawal { amount: 2_000, .. }
        )));
    }

    /// Dropping a chain from the supported set blocks traffic to it.
    #[test]
    fn test_unsupported_chain_blocks_lock() {
        let mut ledger = TestLedger::new();
        ledger
            .bridge
            .set_supported_chain(&ledger.registry, &ADMIN, ChainId::Arbitrum, false)
            .unwrap();

        let err = ledger
            .bridge
            .lock(
                &mut ledger.book,
                &SUPPLIER,
                ChainId::Arbitrum,
                WIDGET_TOKEN,
                2_000,
                RECIPIENT,
                10,
                1_000,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::UnsupportedChain(ChainId::Arbitrum)
        ));
    }
}
