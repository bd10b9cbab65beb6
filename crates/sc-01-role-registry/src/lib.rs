//! # SC-01 Role Registry
//!
//! Capability grants for the settlement core.
//!
//! **Subsystem ID:** 01
//! **Architecture:** flat modules (leaf crate)
//!
//! ## Purpose
//!
//! Holds which accounts may act as supplier, buyer, financier, operator,
//! validator, or administrator. The registry *enforces* policy; an
//! out-of-band provisioning service *decides* it. Checks everywhere else in
//! the core are pure predicate lookups through the `RoleAuthority` port.
//!
//! ## Module Structure
//!
//! ```text
//! sc-01-role-registry/
//! ├── registry.rs      # Grant store, grant/revoke/has_role
//! └── errors.rs        # RoleRegistryError
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod registry;

pub use errors::RoleRegistryError;
pub use registry::RoleRegistry;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
