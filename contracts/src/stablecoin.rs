//! CEP-18 style token.
//!
//! Deployed once as the engine's USD-pegged debt token (with the engine as
//! its only minter) and reused for collateral tokens. Mutating calls report
//! insufficient balance or allowance by returning `false` instead of
//! reverting; only the minter check reverts.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::EngineError;

/// Supply cap value meaning "unlimited"
const UNLIMITED_SUPPLY: u64 = 0;

/// Token contract
#[odra::module]
pub struct StableToken {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Decimals
    decimals: Var<u8>,
    /// Total supply
    total_supply: Var<U256>,
    /// Balance mapping
    balances: Mapping<Address, U256>,
    /// Allowance mapping (owner, spender) -> amount
    allowances: Mapping<(Address, Address), U256>,
    /// Token admin
    admin: Var<Address>,
    /// Authorized minters
    minters: Mapping<Address, bool>,
    /// Optional supply cap
    supply_cap: Var<U256>,
}

#[odra::module]
impl StableToken {
    pub fn init(&mut self, name: String, symbol: String, decimals: u8) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.total_supply.set(U256::zero());
        self.admin.set(self.env().caller());
        self.supply_cap.set(U256::from(UNLIMITED_SUPPLY));
    }

    // ========== CEP-18 Standard Functions ==========

    pub fn name(&self) -> String {
        self.name.get().unwrap_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get().unwrap_or_default()
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(18)
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).unwrap_or_default()
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let sender = self.env().caller();
        self.transfer_internal(sender, recipient, amount)
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.allowances.set(&(owner, spender), amount);
        true
    }

    /// Transfer using the caller's allowance from `owner`.
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        let spender = self.env().caller();
        let current_allowance = self.allowance(owner, spender);
        if current_allowance < amount {
            return false;
        }
        if !self.transfer_internal(owner, recipient, amount) {
            return false;
        }
        self.allowances.set(&(owner, spender), current_allowance - amount);
        true
    }

    // ========== Restricted Functions ==========

    /// Mint to `to` (authorized minters only). Returns `false` past the supply cap.
    pub fn mint(&mut self, to: Address, amount: U256) -> bool {
        self.require_minter();

        let new_supply = self.total_supply() + amount;
        let cap = self.get_supply_cap();
        if !cap.is_zero() && new_supply > cap {
            return false;
        }

        let balance = self.balance_of(to);
        self.balances.set(&to, balance + amount);
        self.total_supply.set(new_supply);
        true
    }

    /// Burn from the caller's own balance.
    pub fn burn(&mut self, amount: U256) -> bool {
        let caller = self.env().caller();
        let balance = self.balance_of(caller);
        if balance < amount {
            return false;
        }
        self.balances.set(&caller, balance - amount);
        let new_supply = self.total_supply() - amount;
        self.total_supply.set(new_supply);
        true
    }

    // ========== Admin Functions ==========

    pub fn add_minter(&mut self, minter: Address) {
        self.require_admin();
        self.minters.set(&minter, true);
    }

    pub fn remove_minter(&mut self, minter: Address) {
        self.require_admin();
        self.minters.set(&minter, false);
    }

    pub fn is_minter(&self, account: Address) -> bool {
        self.minters.get(&account).unwrap_or(false)
    }

    pub fn set_supply_cap(&mut self, cap: U256) {
        self.require_admin();
        self.supply_cap.set(cap);
    }

    pub fn get_supply_cap(&self) -> U256 {
        self.supply_cap.get_or_default()
    }

    pub fn get_admin(&self) -> Option<Address> {
        self.admin.get()
    }

    // ========== Internal Functions ==========

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) -> bool {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            return false;
        }
        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);
        true
    }

    fn require_minter(&self) {
        if !self.is_minter(self.env().caller()) {
            self.env().revert(EngineError::Unauthorized);
        }
    }

    fn require_admin(&self) {
        if self.admin.get() != Some(self.env().caller()) {
            self.env().revert(EngineError::Unauthorized);
        }
    }
}
