//! Minted debt bookkeeping.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::EngineError;

/// Debt ledger
#[odra::module]
pub struct DebtLedger {
    /// Minted debt per user (18 decimals)
    minted: Mapping<Address, U256>,
    /// Sum of all minted debt
    total: Var<U256>,
}

#[odra::module]
impl DebtLedger {
    /// Add `amount` to the user's debt and return the new balance.
    pub fn increase(&mut self, user: Address, amount: U256) -> U256 {
        let debt = self.checked_add(self.minted_debt(user), amount);
        self.minted.set(&user, debt);
        let total = self.checked_add(self.total_debt(), amount);
        self.total.set(total);
        debt
    }

    /// Subtract `amount` from the user's debt and return the new balance.
    /// Reverts with `BurnExceedsDebt` if `amount` exceeds the debt.
    pub fn decrease(&mut self, user: Address, amount: U256) -> U256 {
        let current = self.minted_debt(user);
        if amount > current {
            self.env().revert(EngineError::BurnExceedsDebt);
        }
        let debt = current - amount;
        self.minted.set(&user, debt);
        let total = self.total_debt().saturating_sub(amount);
        self.total.set(total);
        debt
    }

    pub fn minted_debt(&self, user: Address) -> U256 {
        self.minted.get(&user).unwrap_or_default()
    }

    pub fn total_debt(&self) -> U256 {
        self.total.get_or_default()
    }

    fn checked_add(&self, a: U256, b: U256) -> U256 {
        match a.checked_add(b) {
            Some(sum) => sum,
            None => self.env().revert(EngineError::ArithmeticOverflow),
        }
    }
}
