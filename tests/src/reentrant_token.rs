//! Collateral token that calls back into the engine from `transfer_from`,
//! either into `deposit` or into the `set_max_price_age` admin setter.

use odra::casper_types::U256;
use odra::prelude::*;
use odra::ContractRef;

#[odra::external_contract]
pub trait EngineEntry {
    fn deposit(&mut self, token: Address, amount: U256);
    fn set_max_price_age(&mut self, seconds: u64);
}

#[odra::module]
pub struct ReentrantToken {
    engine: Var<Address>,
    call_setter: Var<bool>,
}

#[odra::module]
impl ReentrantToken {
    pub fn init(&mut self, engine: Address, call_setter: bool) {
        self.engine.set(engine);
        self.call_setter.set(call_setter);
    }

    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        if let Some(engine) = self.engine.get() {
            let mut entry = EngineEntryContractRef::new(self.env().clone(), engine);
            if self.call_setter.get_or_default() {
                entry.set_max_price_age(60);
            } else {
                entry.deposit(self.env().self_address(), amount);
            }
        }
        true
    }

    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        true
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        U256::zero()
    }
}
