//! Registry of accepted collateral assets.
//!
//! Active assets live in a dense index (`slots`) with a reverse lookup
//! (`slot_of`). Removal moves the last slot into the freed one and truncates,
//! so the order of the remaining assets is not stable.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::errors::EngineError;
use crate::events::{AssetRegistered, AssetUnregistered};
use crate::guards;
use crate::interfaces::PriceSourceContractRef;
use crate::types::CollateralAsset;

/// Default floor on the number of listed assets
pub const DEFAULT_MIN_ACTIVE_ASSETS: u32 = 1;

/// Collateral asset registry
#[odra::module(events = [AssetRegistered, AssetUnregistered])]
pub struct AssetRegistry {
    /// Asset records by token address
    assets: Mapping<Address, CollateralAsset>,
    /// Dense list of active token addresses
    slots: Mapping<u32, Address>,
    /// Slot index of each active token
    slot_of: Mapping<Address, u32>,
    /// Number of active assets
    count: Var<u32>,
    /// Floor on the number of active assets
    min_active_assets: Var<u32>,
}

#[odra::module]
impl AssetRegistry {
    /// List `token` priced by `price_feed`, or replace the feed of a listed token.
    pub fn register(&mut self, token: Address, price_feed: Address) {
        if let Err(error) = guards::non_null(&token).and(guards::non_null(&price_feed)) {
            self.env().revert(error);
        }

        let feed = PriceSourceContractRef::new(self.env().clone(), price_feed);
        let feed_decimals = feed.decimals();
        if feed_decimals > crate::math::CANONICAL_DECIMALS {
            self.env().revert(EngineError::InvalidFeedDecimals);
        }

        if !self.is_registered(token) {
            let count = self.count.get_or_default();
            self.slots.set(&count, token);
            self.slot_of.set(&token, count);
            self.count.set(count + 1);
        }

        self.assets.set(
            &token,
            CollateralAsset {
                token,
                price_feed,
                feed_decimals,
                is_active: true,
            },
        );

        self.env().emit_event(AssetRegistered {
            token,
            price_feed,
            feed_decimals,
        });
    }

    /// Register each `(tokens[i], price_feeds[i])` pair in order.
    pub fn register_batch(&mut self, tokens: Vec<Address>, price_feeds: Vec<Address>) {
        if let Err(error) = guards::batch_shape(tokens.len(), price_feeds.len()) {
            self.env().revert(error);
        }
        for (token, price_feed) in tokens.into_iter().zip(price_feeds) {
            self.register(token, price_feed);
        }
    }

    /// Delist `token`. `custody` is the engine's current balance of it.
    pub fn unregister(&mut self, token: Address, custody: U256) {
        if !self.is_registered(token) {
            self.env().revert(EngineError::AssetNotRegistered);
        }

        let count = self.count.get_or_default();
        let floor = self.min_active_assets().max(1);
        if count <= floor {
            self.env().revert(EngineError::CannotRemoveLastAsset);
        }

        if !custody.is_zero() {
            self.env().revert(EngineError::AssetHasActiveBalance);
        }

        let slot = self.slot_of.get(&token).unwrap_or_default();
        let last = count - 1;
        if slot != last {
            if let Some(moved) = self.slots.get(&last) {
                self.slots.set(&slot, moved);
                self.slot_of.set(&moved, slot);
            }
        }
        self.count.set(last);

        if let Some(mut record) = self.assets.get(&token) {
            record.is_active = false;
            self.assets.set(&token, record);
        }

        self.env().emit_event(AssetUnregistered { token });
    }

    /// Set the floor on listed assets. Must be between 1 and the current count.
    pub fn set_min_active_assets(&mut self, min_active_assets: u32) {
        if min_active_assets == 0 || min_active_assets > self.active_count() {
            self.env().revert(EngineError::InvalidConfig);
        }
        self.min_active_assets.set(min_active_assets);
    }

    /// Record for an active asset, reverting with `AssetNotAccepted` otherwise.
    pub fn require_accepted(&self, token: Address) -> CollateralAsset {
        match self.asset(token) {
            Some(asset) => asset,
            None => self.env().revert(EngineError::AssetNotAccepted),
        }
    }

    pub fn asset(&self, token: Address) -> Option<CollateralAsset> {
        self.assets.get(&token).filter(|asset| asset.is_active)
    }

    pub fn is_registered(&self, token: Address) -> bool {
        self.asset(token).is_some()
    }

    /// Active tokens in slot order.
    pub fn active_assets(&self) -> Vec<Address> {
        (0..self.active_count())
            .filter_map(|slot| self.slots.get(&slot))
            .collect()
    }

    pub fn active_count(&self) -> u32 {
        self.count.get_or_default()
    }

    pub fn min_active_assets(&self) -> u32 {
        self.min_active_assets
            .get()
            .unwrap_or(DEFAULT_MIN_ACTIVE_ASSETS)
    }
}
