//! Health factor calculation.
//!
//! A position is healthy while half of its collateral value (the liquidation
//! threshold) still covers its debt, i.e. it stays at or above 200%
//! collateralization.
//!
//! health_factor = (collateral_usd * LIQUIDATION_THRESHOLD / LIQUIDATION_PRECISION)
//!                 * PRECISION / debt

use odra::casper_types::U256;
use crate::errors::EngineError;
use crate::math::PRECISION;

/// Share of collateral value counted toward solvency, in percent
pub const LIQUIDATION_THRESHOLD: u64 = 50;

/// Percent scale
pub const LIQUIDATION_PRECISION: u64 = 100;

/// Minimum health factor (1.0)
pub const MIN_HEALTH_FACTOR: u128 = PRECISION;

/// Health factor of a position. Debt-free positions return `U256::MAX`.
pub fn calculate_health_factor(total_debt: U256, collateral_value_usd: U256) -> U256 {
    if total_debt.is_zero() {
        return U256::MAX;
    }
    let adjusted = collateral_value_usd.saturating_mul(U256::from(LIQUIDATION_THRESHOLD))
        / U256::from(LIQUIDATION_PRECISION);
    adjusted.saturating_mul(U256::from(PRECISION)) / total_debt
}

pub fn is_healthy(health_factor: U256) -> bool {
    health_factor >= U256::from(MIN_HEALTH_FACTOR)
}

pub fn require_healthy(health_factor: U256) -> Result<(), EngineError> {
    if !is_healthy(health_factor) {
        return Err(EngineError::UnhealthyPosition);
    }
    Ok(())
}
