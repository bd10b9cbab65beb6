//! # Role Grant Store
//!
//! `AccountId → RoleSet` mapping, mutated only by Admin-capability callers.
//! There is no self-granting bypass: the Admin check applies even when the
//! caller grants to itself.

use crate::errors::RoleRegistryError;
use shared_types::{short_hex, AccountId, EventLog, LedgerEvent, Role, RoleAuthority, RoleSet};
use std::collections::HashMap;
use tracing::info;

/// Capability grant registry. Leaf dependency for every other subsystem.
#[derive(Clone, Debug, Default)]
pub struct RoleRegistry {
    grants: HashMap<AccountId, RoleSet>,
    events: EventLog,
}

impl RoleRegistry {
    /// Create a registry with one bootstrap administrator. Without it no
    /// grant could ever be issued.
    pub fn bootstrap(admin: AccountId) -> Self {
        let mut registry = Self::default();
        registry.grants.insert(admin, RoleSet::only(Role::Admin));
        registry.events.record(LedgerEvent::RoleGranted {
            account: admin,
            role: Role::Admin,
        });
        registry
    }

    /// Grant `role` to `account`. Requires `caller` to hold `Admin`.
    pub fn grant(
        &mut self,
        caller: &AccountId,
        account: AccountId,
        role: Role,
    ) -> Result<(), RoleRegistryError> {
        self.require_admin(caller)?;
        self.grants.entry(account).or_default().insert(role);
        self.events
            .record(LedgerEvent::RoleGranted { account, role });
        info!(account = %short_hex(&account), %role, "role granted");
        Ok(())
    }

    /// Revoke `role` from `account`. Requires `caller` to hold `Admin`.
    pub fn revoke(
        &mut self,
        caller: &AccountId,
        account: AccountId,
        role: Role,
    ) -> Result<(), RoleRegistryError> {
        self.require_admin(caller)?;
        if let Some(set) = self.grants.get_mut(&account) {
            set.remove(role);
        }
        self.events
            .record(LedgerEvent::RoleRevoked { account, role });
        info!(account = %short_hex(&account), %role, "role revoked");
        Ok(())
    }

    /// Roles currently held by `account`.
    pub fn roles_of(&self, account: &AccountId) -> RoleSet {
        self.grants.get(account).copied().unwrap_or_default()
    }

    /// Events pending for the off-chain indexer.
    pub fn events(&self) -> &[LedgerEvent] {
        self.events.as_slice()
    }

    /// Drain pending events.
    pub fn take_events(&mut self) -> Vec<LedgerEvent> {
        self.events.drain()
    }

    fn require_admin(&self, caller: &AccountId) -> Result<(), RoleRegistryError> {
        if !self.has_role(caller, Role::Admin) {
            return Err(RoleRegistryError::Unauthorized {
                caller: *caller,
                required: Role::Admin,
            });
        }
        Ok(())
    }
}

impl RoleAuthority for RoleRegistry {
    fn has_role(&self, account: &AccountId, role: Role) -> bool {
        self.roles_of(account).contains(role)
    }
}
