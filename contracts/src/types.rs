//! Common types used across the engine.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::casper_types::account::AccountHash;

/// Listed collateral asset
#[odra::odra_type]
pub struct CollateralAsset {
    /// Collateral token contract address
    pub token: Address,
    /// Price source contract address
    pub price_feed: Address,
    /// Fixed-point decimals reported by the price source
    pub feed_decimals: u8,
    /// Whether the asset is currently listed
    pub is_active: bool,
}

/// Raw quote returned by a price source
#[odra::odra_type]
pub struct RoundData {
    /// Price in the feed's own fixed-point precision
    pub answer: U256,
    /// Timestamp of the quote in seconds
    pub updated_at: u64,
}

/// Snapshot of a user's position
#[odra::odra_type]
pub struct AccountInfo {
    /// Minted debt (18 decimals)
    pub total_debt: U256,
    /// Collateral value in USD (18 decimals)
    pub collateral_value_usd: U256,
    /// Health factor (1e18 = 1.0)
    pub health_factor: U256,
}

/// Collateral owed to a liquidator for a given debt repayment
#[odra::odra_type]
pub struct LiquidationQuote {
    /// Collateral equal in value to the repaid debt
    pub base_collateral: U256,
    /// Bonus collateral on top of the base amount
    pub bonus_collateral: U256,
    /// Total collateral seized
    pub total_collateral: U256,
}

/// Cumulative liquidation statistics
#[odra::odra_type]
#[derive(Default)]
pub struct LiquidationStats {
    /// Number of liquidations executed
    pub total_liquidations: u64,
    /// Total debt repaid by liquidators
    pub total_debt_covered: U256,
}

/// The null identity: an account with an all-zero hash.
pub fn null_address() -> Address {
    Address::Account(AccountHash::default())
}

/// Whether `address` is the null identity.
pub fn is_null_address(address: &Address) -> bool {
    *address == null_address()
}
