//! Engine events.

use odra::prelude::*;
use odra::casper_types::U256;

#[odra::event]
pub struct AssetRegistered {
    pub token: Address,
    pub price_feed: Address,
    pub feed_decimals: u8,
}

#[odra::event]
pub struct AssetUnregistered {
    pub token: Address,
}

#[odra::event]
pub struct CollateralDeposited {
    pub user: Address,
    pub token: Address,
    pub amount: U256,
}

#[odra::event]
pub struct CollateralRedeemed {
    pub from: Address,
    pub to: Address,
    pub token: Address,
    pub amount: U256,
}

#[odra::event]
pub struct DebtMinted {
    pub user: Address,
    pub amount: U256,
    pub new_debt: U256,
}

#[odra::event]
pub struct DebtBurned {
    pub on_behalf_of: Address,
    pub payer: Address,
    pub amount: U256,
    pub new_debt: U256,
}

#[odra::event]
pub struct Liquidation {
    pub debtor: Address,
    pub liquidator: Address,
    pub token: Address,
    pub debt_covered: U256,
    pub collateral_seized: U256,
}
