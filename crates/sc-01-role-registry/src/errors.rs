//! # Registry Errors

use shared_types::{AccountId, Role};
use thiserror::Error;

/// Role registry error types.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoleRegistryError {
    /// Caller does not hold the capability the operation requires.
    #[error("unauthorized: caller lacks the {required} capability")]
    Unauthorized {
        /// Account that attempted the operation.
        caller: AccountId,
        /// Capability the operation requires.
        required: Role,
    },
}
