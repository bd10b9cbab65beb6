//! # Settlement Flows
//!
//! Invoice lifecycle against the real role registry and account book:
//! create, finance, ship, pay, with payment routing to the financier
//! when the invoice was financed.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use sc_02_invoice_settlement::SettlementError;
    use shared_types::{BalanceLedger, LedgerEvent, ShipmentStatus, NATIVE_TOKEN};

    /// Financed invoice: the financier advances 800 against a 1000
    /// invoice and collects the full face value at payment.
    #[test]
    fn test_financed_invoice_routes_payment_to_financier() {
        let mut ledger = TestLedger::new();

        let invoice_id = ledger
            .settlement
            .create_invoice(&ledger.registry, &SUPPLIER, SUPPLIER, BUYER, 1_000, 2_000)
            .unwrap();
        ledger
            .settlement
            .finance_invoice(&ledger.registry, &mut ledger.book, &FINANCIER, invoice_id, 800)
            .unwrap();

        // Supplier got the advance.
        assert_eq!(ledger.book.balance_of(NATIVE_TOKEN, &SUPPLIER), 10_800);
        assert_eq!(ledger.book.balance_of(NATIVE_TOKEN, &FINANCIER), 99_200);

        ledger
            .settlement
            .pay_invoice(&mut ledger.book, &BUYER, invoice_id)
            .unwrap();

        // Buyer paid face value; it went to the financier, not the supplier.
        assert_eq!(ledger.book.balance_of(NATIVE_TOKEN, &BUYER), 99_000);
        assert_eq!(ledger.book.balance_of(NATIVE_TOKEN, &FINANCIER), 100_200);
        assert_eq!(ledger.book.balance_of(NATIVE_TOKEN, &SUPPLIER), 10_800);

        let invoice = ledger.settlement.get_invoice(invoice_id).unwrap();
        assert!(invoice.paid);
        assert_eq!(invoice.financier, Some(FINANCIER));
    }

    /// Unfinanced invoice: payment goes straight to the supplier.
    #[test]
    fn test_unfinanced_invoice_pays_supplier() {
        let mut ledger = TestLedger::new();

        let invoice_id = ledger
            .settlement
            .create_invoice(&ledger.registry, &SUPPLIER, SUPPLIER, BUYER, 1_000, 2_000)
            .unwrap();
        ledger
            .settlement
            .pay_invoice(&mut ledger.book, &BUYER, invoice_id)
            .unwrap();

        assert_eq!(ledger.book.balance_of(NATIVE_TOKEN, &SUPPLIER), 11_000);
        assert_eq!(ledger.book.balance_of(NATIVE_TOKEN, &BUYER), 99_000);
    }

    /// Full lifecycle with a shipment tracked alongside the invoice.
    #[test]
    fn test_invoice_with_shipment_lifecycle() {
        let mut ledger = TestLedger::new();

        let invoice_id = ledger
            .settlement
            .create_invoice(&ledger.registry, &SUPPLIER, SUPPLIER, BUYER, 5_000, 9_000)
            .unwrap();
        let shipment_id = ledger
            .settlement
            .create_shipment(
                &ledger.registry,
                &SUPPLIER,
                SUPPLIER,
                BUYER,
                "CRATE-001".to_string(),
                120,
                1_000,
            )
            .unwrap();

        ledger
            .settlement
            .update_shipment_status(
                &ledger.registry,
                &OPERATOR,
                shipment_id,
                ShipmentStatus::InTransit,
            )
            .unwrap();
        ledger
            .settlement
            .update_shipment_status(
                &ledger.registry,
                &OPERATOR,
                shipment_id,
                ShipmentStatus::Delivered,
            )
            .unwrap();
        ledger
            .settlement
            .pay_invoice(&mut ledger.book, &BUYER, invoice_id)
            .unwrap();

        let shipment = ledger.settlement.get_shipment(shipment_id).unwrap();
        assert_eq!(shipment.status, ShipmentStatus::Delivered);

        // One event per successful operation, in execution order.
        let events = ledger.settlement.take_events();
        assert_eq!(events.len(), 5);
        assert!(matches!(events[0], LedgerEvent::InvoiceCreated { .. }));
        assert!(matches!(events[4], LedgerEvent::InvoicePaid { .. }));
    }

    /// A delivered shipment is terminal; no further updates land.
    #[test]
    fn test_delivered_shipment_rejects_updates() {
        let mut ledger = TestLedger::new();
        let shipment_id = ledger
            .settlement
            .create_shipment(
                &ledger.registry,
                &SUPPLIER,
                SUPPLIER,
                BUYER,
                "CRATE-002".to_string(),
                10,
                1_000,
            )
            .unwrap();
        for status in [ShipmentStatus::InTransit, ShipmentStatus::Delivered] {
            ledger
                .settlement
                .update_shipment_status(&ledger.registry, &OPERATOR, shipment_id, status)
                .unwrap();
        }

        let err = ledger
            .settlement
            .update_shipment_status(
                &ledger.registry,
                &OPERATOR,
                shipment_id,
                ShipmentStatus::Exception,
            )
            .unwrap_err();
        assert!(matches!(err, SettlementError::InvalidTransition { .. }));
    }

    /// Financing after payment is refused and moves no funds.
    #[test]
    fn test_finance_after_payment_rejected() {
        let mut ledger = TestLedger::new();
        let invoice_id = ledger
            .settlement
            .create_invoice(&ledger.registry, &SUPPLIER, SUPPLIER, BUYER, 1_000, 2_000)
            .unwrap();
        ledger
            .settlement
            .pay_invoice(&mut ledger.book, &BUYER, invoice_id)
            .unwrap();

        let before = ledger.book.balance_of(NATIVE_TOKEN, &FINANCIER);
        let err = ledger
            .settlement
            .finance_invoice(&ledger.registry, &mut ledger.book, &FINANCIER, invoice_id, 500)
            .unwrap_err();
        assert!(matches!(err, SettlementError::AlreadyPaid(_)));
        assert_eq!(ledger.book.balance_of(NATIVE_TOKEN, &FINANCIER), before);
    }

    /// Only the invoice's own buyer can pay it, buyer role or not.
    #[test]
    fn test_only_named_buyer_can_pay() {
        let mut ledger = TestLedger::new();
        let invoice_id = ledger
            .settlement
            .create_invoice(&ledger.registry, &SUPPLIER, SUPPLIER, BUYER, 1_000, 2_000)
            .unwrap();

        let err = ledger
            .settlement
            .pay_invoice(&mut ledger.book, &MALLORY, invoice_id)
            .unwrap_err();
        assert!(matches!(err, SettlementError::NotInvoiceBuyer { .. }));
        assert!(!ledger.settlement.get_invoice(invoice_id).unwrap().paid);
    }
}
