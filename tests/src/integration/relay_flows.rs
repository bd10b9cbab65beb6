//! # Relay Flows
//!
//! Inbound message admission with real quorum signatures.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use sc_04_message_relay::{relay_quorum_message, RelayError};
    use shared_types::ChainId;

    #[test]
    fn test_quorum_approved_message_admitted_once() {
        let mut ledger = TestLedger::new();
        let payload = b"release:transfer-9".to_vec();
        let message = relay_quorum_message(ChainId::Ethereum, &RECIPIENT, &payload);

        let id = ledger
            .relay
            .relay_message(
                &ledger.verifier,
                ChainId::Ethereum,
                &RECIPIENT,
                payload.clone(),
                &quorum(&message),
                1_000,
            )
            .unwrap();
        assert!(ledger.relay.is_processed(&id));

        // Same content, same timestamp: replay.
        let err = ledger
            .relay
            .relay_message(
                &ledger.verifier,
                ChainId::Ethereum,
                &RECIPIENT,
                payload,
                &quorum(&message),
                1_000,
            )
            .unwrap_err();
        assert_eq!(err, RelayError::AlreadyProcessed(id));
    }

    #[test]
    fn test_approvals_do_not_transfer_between_payloads() {
        let mut ledger = TestLedger::new();
        let message = relay_quorum_message(ChainId::Ethereum, &RECIPIENT, b"pay supplier 100");

        // Signatures over one payload, submission of another.
        let err = ledger
            .relay
            .relay_message(
                &ledger.verifier,
                ChainId::Ethereum,
                &RECIPIENT,
                b"pay mallory 100000".to_vec(),
                &quorum(&message),
                1_000,
            )
            .unwrap_err();
        assert!(matches!(err, RelayError::QuorumNotMet { signers: 0 }));
        assert!(ledger.relay.is_empty());
    }

    #[test]
    fn test_distinct_origins_yield_distinct_ids() {
        let mut ledger = TestLedger::new();
        let payload = b"ack".to_vec();

        let eth_message = relay_quorum_message(ChainId::Ethereum, &RECIPIENT, &payload);
        let poly_message = relay_quorum_message(ChainId::Polygon, &RECIPIENT, &payload);

        let a = ledger
            .relay
            .relay_message(
                &ledger.verifier,
                ChainId::Ethereum,
                &RECIPIENT,
                payload.clone(),
                &quorum(&eth_message),
                1_000,
            )
            .unwrap();
        let b = ledger
            .relay
            .relay_message(
                &ledger.verifier,
                ChainId::Polygon,
                &RECIPIENT,
                payload,
                &quorum(&poly_message),
                1_000,
            )
            .unwrap();
        assert_ne!(a, b);
        assert_eq!(ledger.relay.len(), 2);
    }
}
