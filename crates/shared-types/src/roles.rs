//! # Roles and Capabilities
//!
//! Closed capability model for the settlement core. A `Role` is a tag in a
//! closed enum, and an account's grants are a `RoleSet` bitset. Authorization
//! is always a pure predicate lookup (`RoleSet::contains`), never dispatch
//! over role objects.

use serde::{Deserialize, Serialize};

/// A capability an account may hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// May mutate role grants and invoke emergency overrides.
    Admin,
    /// May create invoices and shipment records.
    Supplier,
    /// Owes invoices; only the recorded buyer may pay one.
    Buyer,
    /// May advance funds against an invoice.
    Financier,
    /// May update shipment status; receives bridge fees.
    Operator,
    /// May sign bridge releases and relayed messages.
    Validator,
}

impl Role {
    fn bit(self) -> u8 {
        match self {
            Role::Admin => 1 << 0,
            Role::Supplier => 1 << 1,
            Role::Buyer => 1 << 2,
            Role::Financier => 1 << 3,
            Role::Operator => 1 << 4,
            Role::Validator => 1 << 5,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Admin => "Admin",
            Role::Supplier => "Supplier",
            Role::Buyer => "Buyer",
            Role::Financier => "Financier",
            Role::Operator => "Operator",
            Role::Validator => "Validator",
        };
        write!(f, "{name}")
    }
}

/// Set of roles held by one account, packed into a single byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet(u8);

impl RoleSet {
    /// Empty set.
    pub fn empty() -> Self {
        Self(0)
    }

    /// Set containing exactly one role.
    pub fn only(role: Role) -> Self {
        Self(role.bit())
    }

    /// Add a role. Idempotent.
    pub fn insert(&mut self, role: Role) {
        self.0 |= role.bit();
    }

    /// Remove a role. Idempotent.
    pub fn remove(&mut self, role: Role) {
        self.0 &= !role.bit();
    }

    /// Predicate lookup used by every authorization check.
    pub fn contains(&self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    /// True if no roles are held.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
