//! USD Engine Contracts
//!
//! Overcollateralized USD stablecoin engine for Casper, built with Odra.
//!
//! ## Architecture
//!
//! - **StableEngine**: Deployable contract exposing every entry point
//! - **AssetRegistry**: Listed collateral assets and their price sources
//! - **PriceOracleAdapter**: Freshness checks and 18-decimal price normalization
//! - **CollateralLedger**: Per-user, per-asset deposits
//! - **DebtLedger**: Per-user minted debt
//! - **Solvency**: Health factor (50% liquidation threshold, 1.0 minimum)
//! - **Liquidation**: Partial liquidation with a 10% collateral bonus
//!
//! ## Collaborators
//!
//! - **StableToken**: CEP-18 style token used as the debt token and for collateral
//! - **ManualPriceFeed**: Fed price source implementing the `PriceSource` interface

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod types;
pub mod errors;
pub mod events;
pub mod interfaces;
pub mod math;
pub mod guards;
pub mod solvency;
pub mod liquidation;

// Engine components
pub mod asset_registry;
pub mod price_oracle;
pub mod collateral_ledger;
pub mod debt_ledger;
pub mod reentrancy;
pub mod engine;

// Collaborator contracts
pub mod stablecoin;
pub mod price_feed;
