//! Price Oracle Adapter
//!
//! Reads quotes from per-asset price sources and turns them into canonical
//! 18-decimal USD prices. Implements:
//! - Freshness check against a configurable maximum age
//! - Per-feed decimal normalization
//! - USD <-> token amount conversion
//!
//! This is the only component that knows the price source wire format.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::errors::EngineError;
use crate::interfaces::PriceSourceContractRef;
use crate::math::{self, MILLIS_PER_SECOND};
use crate::types::CollateralAsset;

/// Default maximum price age in seconds (1 hour)
pub const DEFAULT_MAX_PRICE_AGE_SECONDS: u64 = 3600;

/// Price Oracle Adapter
#[odra::module]
pub struct PriceOracleAdapter {
    /// Maximum age of a usable quote in seconds
    max_price_age: Var<u64>,
}

#[odra::module]
impl PriceOracleAdapter {
    /// Latest USD price of `asset`, scaled to 18 decimals.
    pub fn latest_usd_price(&self, asset: CollateralAsset) -> U256 {
        let feed = PriceSourceContractRef::new(self.env().clone(), asset.price_feed);
        let round = feed.latest_round_data();

        if math::is_stale(self.now_secs(), round.updated_at, self.max_price_age()) {
            self.env().revert(EngineError::StalePrice);
        }

        self.or_revert(math::normalize_price(round.answer, asset.feed_decimals))
    }

    /// USD value (18 decimals) of `amount` units of `asset`.
    pub fn usd_value(&self, asset: CollateralAsset, amount: U256) -> U256 {
        let price = self.latest_usd_price(asset);
        self.or_revert(math::usd_value(price, amount))
    }

    /// Units of `asset` worth `usd_amount` (18 decimals).
    pub fn token_amount_from_usd(&self, asset: CollateralAsset, usd_amount: U256) -> U256 {
        let price = self.latest_usd_price(asset);
        self.or_revert(math::token_amount_from_usd(price, usd_amount))
    }

    pub fn set_max_price_age(&mut self, seconds: u64) {
        if seconds == 0 {
            self.env().revert(EngineError::InvalidConfig);
        }
        self.max_price_age.set(seconds);
    }

    pub fn max_price_age(&self) -> u64 {
        self.max_price_age
            .get()
            .unwrap_or(DEFAULT_MAX_PRICE_AGE_SECONDS)
    }

    fn or_revert(&self, result: Result<U256, EngineError>) -> U256 {
        match result {
            Ok(value) => value,
            Err(error) => self.env().revert(error),
        }
    }

    fn now_secs(&self) -> u64 {
        self.env().get_block_time() / MILLIS_PER_SECOND
    }
}
