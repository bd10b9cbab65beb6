//! # Settlement Engine Service
//!
//! Application service owning the invoice and shipment stores. Exactly one
//! operation executes at a time; each either commits all of its state
//! mutations and events or leaves no observable effect.
//!
//! Within an operation, engine state is mutated strictly before the
//! outbound balance transfer ("effects before interactions"), so a
//! reentrant call triggered by the transfer observes the terminal flags and
//! is rejected by the ordinary guards. If the transfer primitive itself
//! fails, the mutation is restored before the error is returned.

use crate::domain::entities::{Invoice, ShipmentRecord};
use crate::domain::errors::SettlementError;
use crate::domain::invariants::{invariant_financing_bound, invariant_positive_amount};
use shared_types::{
    AccountId, Amount, BalanceLedger, EventLog, LedgerEvent, Role, RoleAuthority, ShipmentStatus,
    Timestamp, NATIVE_TOKEN,
};
use std::collections::BTreeMap;
use tracing::info;

/// Invoice Settlement Engine.
///
/// Owns the receivables ledger. Collaborators (role authority, balance
/// primitive) are passed into each operation explicitly; the engine holds
/// no reference into another component's state.
#[derive(Clone, Debug, Default)]
pub struct SettlementEngine {
    invoices: BTreeMap<u64, Invoice>,
    shipments: BTreeMap<u64, ShipmentRecord>,
    next_invoice_id: u64,
    next_shipment_id: u64,
    events: EventLog,
    in_flight: bool,
}

impl SettlementEngine {
    /// Create an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new invoice. Requires the `Supplier` capability.
    pub fn create_invoice(
        &mut self,
        roles: &dyn RoleAuthority,
        caller: &AccountId,
        supplier: AccountId,
        buyer: AccountId,
        amount: Amount,
        due_date: Timestamp,
    ) -> Result<u64, SettlementError> {
        self.require_role(roles, caller, Role::Supplier)?;
        invariant_positive_amount(amount)?;

        self.next_invoice_id += 1;
        let id = self.next_invoice_id;
        self.invoices
            .insert(id, Invoice::new(id, supplier, buyer, amount, due_date));
        self.events.record(LedgerEvent::InvoiceCreated {
            invoice_id: id,
            supplier,
            buyer,
            amount,
            due_date,
        });
        info!(invoice_id = id, amount, "invoice created");
        Ok(id)
    }

    /// Advance `amount` against an invoice. Requires the `Financier`
    /// capability; moves funds financier → supplier.
    pub fn finance_invoice(
        &mut self,
        roles: &dyn RoleAuthority,
        book: &mut dyn BalanceLedger,
        caller: &AccountId,
        invoice_id: u64,
        amount: Amount,
    ) -> Result<(), SettlementError> {
        self.begin()?;
        let result = self.finance_invoice_inner(roles, book, caller, invoice_id, amount);
        self.end();
        result
    }

    fn finance_invoice_inner(
        &mut self,
        roles: &dyn RoleAuthority,
        book: &mut dyn BalanceLedger,
        caller: &AccountId,
        invoice_id: u64,
        amount: Amount,
    ) -> Result<(), SettlementError> {
        self.require_role(roles, caller, Role::Financier)?;
        invariant_positive_amount(amount)?;

        let invoice = self
            .invoices
            .get_mut(&invoice_id)
            .ok_or(SettlementError::InvoiceNotFound(invoice_id))?;
        if invoice.paid {
            return Err(SettlementError::AlreadyPaid(invoice_id));
        }
        if invoice.financed {
            return Err(SettlementError::AlreadyFinanced(invoice_id));
        }
        invariant_financing_bound(amount, invoice.amount)?;

        // Effects first: a reentrant financing attempt now sees `financed`.
        invoice.financed = true;
        invoice.financier = Some(*caller);
        invoice.financed_amount = amount;
        let supplier = invoice.supplier;

        if let Err(transfer_err) = book.transfer(NATIVE_TOKEN, caller, &supplier, amount) {
            if let Some(invoice) = self.invoices.get_mut(&invoice_id) {
                invoice.financed = false;
                invoice.financier = None;
                invoice.financed_amount = 0;
            }
            return Err(transfer_err.into());
        }

        self.events.record(LedgerEvent::InvoiceFinanced {
            invoice_id,
            financier: *caller,
            amount,
        });
        info!(invoice_id, amount, "invoice financed");
        Ok(())
    }

    /// Settle an invoice in full. Only the recorded buyer may call; the
    /// face amount is routed to the financier if financed, else the
    /// supplier.
    pub fn pay_invoice(
        &mut self,
        book: &mut dyn BalanceLedger,
        caller: &AccountId,
        invoice_id: u64,
    ) -> Result<(), SettlementError> {
        self.begin()?;
        let result = self.pay_invoice_inner(book, caller, invoice_id);
        self.end();
        result
    }

    fn pay_invoice_inner(
        &mut self,
        book: &mut dyn BalanceLedger,
        caller: &AccountId,
        invoice_id: u64,
    ) -> Result<(), SettlementError> {
        let invoice = self
            .invoices
            .get_mut(&invoice_id)
            .ok_or(SettlementError::InvoiceNotFound(invoice_id))?;
        if *caller != invoice.buyer {
            return Err(SettlementError::NotInvoiceBuyer {
                caller: *caller,
                invoice_id,
            });
        }
        if invoice.paid {
            return Err(SettlementError::AlreadyPaid(invoice_id));
        }

        // Effects first: a reentrant payment attempt now sees `paid`.
        invoice.paid = true;
        let amount = invoice.amount;
        let beneficiary = invoice.beneficiary();

        if let Err(transfer_err) = book.transfer(NATIVE_TOKEN, caller, &beneficiary, amount) {
            if let Some(invoice) = self.invoices.get_mut(&invoice_id) {
                invoice.paid = false;
            }
            return Err(transfer_err.into());
        }

        self.events.record(LedgerEvent::InvoicePaid {
            invoice_id,
            payer: *caller,
            beneficiary,
            amount,
        });
        info!(invoice_id, amount, "invoice paid");
        Ok(())
    }

    /// Read an invoice snapshot.
    pub fn get_invoice(&self, invoice_id: u64) -> Result<&Invoice, SettlementError> {
        self.invoices
            .get(&invoice_id)
            .ok_or(SettlementError::InvoiceNotFound(invoice_id))
    }

    /// Register a shipment record. Requires the `Supplier` capability.
    pub fn create_shipment(
        &mut self,
        roles: &dyn RoleAuthority,
        caller: &AccountId,
        supplier: AccountId,
        buyer: AccountId,
        product_id: String,
        quantity: Amount,
        now: Timestamp,
    ) -> Result<u64, SettlementError> {
        self.require_role(roles, caller, Role::Supplier)?;
        invariant_positive_amount(quantity)?;

        self.next_shipment_id += 1;
        let id = self.next_shipment_id;
        self.shipments.insert(
            id,
            ShipmentRecord::new(id, supplier, buyer, product_id.clone(), quantity, now),
        );
        self.events.record(LedgerEvent::ShipmentCreated {
            shipment_id: id,
            supplier,
            buyer,
            product_id,
            quantity,
        });
        info!(shipment_id = id, "shipment created");
        Ok(id)
    }

    /// Move a shipment through its lifecycle. Requires the `Operator`
    /// capability; invalid transitions are rejected.
    pub fn update_shipment_status(
        &mut self,
        roles: &dyn RoleAuthority,
        caller: &AccountId,
        shipment_id: u64,
        status: ShipmentStatus,
    ) -> Result<(), SettlementError> {
        self.require_role(roles, caller, Role::Operator)?;

        let shipment = self
            .shipments
            .get_mut(&shipment_id)
            .ok_or(SettlementError::ShipmentNotFound(shipment_id))?;
        if !shipment.status.can_transition_to(status) {
            return Err(SettlementError::InvalidTransition {
                from: shipment.status,
                to: status,
            });
        }
        shipment.status = status;

        self.events.record(LedgerEvent::ShipmentUpdated {
            shipment_id,
            status,
        });
        info!(shipment_id, %status, "shipment updated");
        Ok(())
    }

    /// Read a shipment snapshot.
    pub fn get_shipment(&self, shipment_id: u64) -> Result<&ShipmentRecord, SettlementError> {
        self.shipments
            .get(&shipment_id)
            .ok_or(SettlementError::ShipmentNotFound(shipment_id))
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
    ) -> Result<(), SettlementError> {
        if !roles.has_role(caller, required) {
            return Err(SettlementError::Unauthorized {
                caller: *caller,
                required,
            });
        }
        Ok(())
    }

    // Non-reentrant guard, independent of the effects-before-interactions
    // ordering.
    fn begin(&mut self) -> Result<(), SettlementError> {
        if self.in_flight {
            return Err(SettlementError::ReentrantCall);
        }
        self.in_flight = true;
        Ok(())
    }

    fn end(&mut self) {
        self.in_flight = false;
    }
}
