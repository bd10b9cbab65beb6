//! # In-Memory Account Book
//!
//! Reference implementation of the `BalanceLedger` primitive. Production
//! deployments substitute the host ledger's own balance store; tests and
//! the node runtime use this one.

use crate::ports::{BalanceLedger, TransferError};
use crate::primitives::{AccountId, Amount, TokenId};
use std::collections::HashMap;

/// Per-(token, account) balance map with checked arithmetic.
#[derive(Clone, Debug, Default)]
pub struct InMemoryAccountBook {
    balances: HashMap<(TokenId, AccountId), Amount>,
}

impl InMemoryAccountBook {
    /// Empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit an account out of thin air. Seeding primitive for genesis
    /// allocations and tests; not reachable from any ledger operation.
    pub fn deposit(
        &mut self,
        token: TokenId,
        account: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let balance = self.balances.entry((token, *account)).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(TransferError::BalanceOverflow { amount })?;
        Ok(())
    }
}

impl BalanceLedger for InMemoryAccountBook {
    fn transfer(
        &mut self,
        token: TokenId,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let available = self.balance_of(token, from);
        let debited = available
            .checked_sub(amount)
            .ok_or(TransferError::InsufficientFunds {
                available,
                requested: amount,
            })?;

        // Validate the credit before touching either balance so a failure
        // leaves the book untouched.
        let credit_base = if from == to { debited } else { self.balance_of(token, to) };
        let credited = credit_base
            .checked_add(amount)
            .ok_or(TransferError::BalanceOverflow { amount })?;

        self.balances.insert((token, *from), debited);
        self.balances.insert((token, *to), credited);
        Ok(())
    }

    fn balance_of(&self, token: TokenId, account: &AccountId) -> Amount {
        self.balances.get(&(token, *account)).copied().unwrap_or(0)
    }
}
