//! Manually fed price source.
//!
//! Exposes the `PriceSource` interface for a single asset. An authorized
//! feeder pushes answers in the feed's own fixed-point precision; the
//! engine's oracle adapter validates freshness and rescales.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::EngineError;
use crate::math::MILLIS_PER_SECOND;
use crate::types::RoundData;

/// Decimals used by most USD feeds
pub const DEFAULT_FEED_DECIMALS: u8 = 8;

/// Manually fed price source
#[odra::module]
pub struct ManualPriceFeed {
    /// Account allowed to push answers
    feeder: Var<Address>,
    /// Fixed-point decimals of `answer`
    decimals: Var<u8>,
    /// Latest answer
    answer: Var<U256>,
    /// Timestamp of the latest answer in seconds
    updated_at: Var<u64>,
}

#[odra::module]
impl ManualPriceFeed {
    /// Initialize with a first answer stamped at the current block time.
    pub fn init(&mut self, decimals: u8, initial_answer: U256) {
        self.feeder.set(self.env().caller());
        self.decimals.set(decimals);
        self.answer.set(initial_answer);
        self.updated_at.set(self.now_secs());
    }

    /// Push a new answer stamped at the current block time (feeder only).
    pub fn set_answer(&mut self, answer: U256) {
        let now = self.now_secs();
        self.set_round(answer, now);
    }

    /// Push a new answer with an explicit timestamp in seconds (feeder only).
    pub fn set_round(&mut self, answer: U256, updated_at: u64) {
        self.require_feeder();
        self.answer.set(answer);
        self.updated_at.set(updated_at);
    }

    pub fn set_feeder(&mut self, feeder: Address) {
        self.require_feeder();
        self.feeder.set(feeder);
    }

    pub fn latest_round_data(&self) -> RoundData {
        RoundData {
            answer: self.answer.get_or_default(),
            updated_at: self.updated_at.get_or_default(),
        }
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(DEFAULT_FEED_DECIMALS)
    }

    pub fn feeder(&self) -> Option<Address> {
        self.feeder.get()
    }

    fn require_feeder(&self) {
        let caller = self.env().caller();
        if self.feeder.get() != Some(caller) {
            self.env().revert(EngineError::Unauthorized);
        }
    }

    fn now_secs(&self) -> u64 {
        self.env().get_block_time() / MILLIS_PER_SECOND
    }
}
