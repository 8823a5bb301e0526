//! Collaborator interfaces consumed by the engine.
//!
//! Mutating token calls report failure through their `bool` result; the
//! engine maps a `false` to the matching collaborator error.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::types::RoundData;

/// Fungible token (debt token and collateral tokens)
#[odra::external_contract]
pub trait Cep18Token {
    fn transfer(&mut self, recipient: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool;
    fn balance_of(&self, account: Address) -> U256;
    fn mint(&mut self, to: Address, amount: U256) -> bool;
    fn burn(&mut self, amount: U256) -> bool;
}

/// Price source for a single collateral asset
#[odra::external_contract]
pub trait PriceSource {
    fn latest_round_data(&self) -> RoundData;
    fn decimals(&self) -> u8;
}
