//! Per-user, per-asset collateral bookkeeping.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::EngineError;

/// Collateral ledger
#[odra::module]
pub struct CollateralLedger {
    /// Deposited amount keyed by (user, token)
    deposits: Mapping<(Address, Address), U256>,
    /// Sum of all deposits per token
    totals: Mapping<Address, U256>,
}

#[odra::module]
impl CollateralLedger {
    pub fn credit(&mut self, user: Address, token: Address, amount: U256) {
        let balance = self.checked_add(self.deposited(user, token), amount);
        self.deposits.set(&(user, token), balance);
        let total = self.checked_add(self.total_deposited(token), amount);
        self.totals.set(&token, total);
    }

    /// Reverts with `InsufficientCollateral` if `amount` exceeds the deposit.
    pub fn debit(&mut self, user: Address, token: Address, amount: U256) {
        let balance = self.deposited(user, token);
        if amount > balance {
            self.env().revert(EngineError::InsufficientCollateral);
        }
        self.deposits.set(&(user, token), balance - amount);
        let total = self.total_deposited(token);
        self.totals.set(&token, total.saturating_sub(amount));
    }

    pub fn deposited(&self, user: Address, token: Address) -> U256 {
        self.deposits.get(&(user, token)).unwrap_or_default()
    }

    pub fn total_deposited(&self, token: Address) -> U256 {
        self.totals.get(&token).unwrap_or_default()
    }

    fn checked_add(&self, a: U256, b: U256) -> U256 {
        match a.checked_add(b) {
            Some(sum) => sum,
            None => self.env().revert(EngineError::ArithmeticOverflow),
        }
    }
}
