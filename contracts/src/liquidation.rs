//! Liquidation settlement math.
//!
//! A liquidator repays `debt_to_cover` of an unhealthy position and receives
//! collateral worth the repaid debt plus a bonus:
//!
//! 1. base = token_amount_from_usd(asset, debt_to_cover)
//! 2. bonus = base * LIQUIDATION_BONUS / LIQUIDATION_PRECISION
//! 3. seized = base + bonus, bounded by the debtor's deposit of that asset

use odra::casper_types::U256;
use crate::errors::EngineError;
use crate::math::token_amount_from_usd;
use crate::solvency::LIQUIDATION_PRECISION;
use crate::types::LiquidationQuote;

/// Liquidator bonus in percent (10%)
pub const LIQUIDATION_BONUS: u64 = 10;

/// Collateral owed for repaying `debt_to_cover` at `price` (18 decimals).
pub fn quote(price: U256, debt_to_cover: U256) -> Result<LiquidationQuote, EngineError> {
    let base_collateral = token_amount_from_usd(price, debt_to_cover)?;
    let bonus_collateral = base_collateral
        .checked_mul(U256::from(LIQUIDATION_BONUS))
        .ok_or(EngineError::ArithmeticOverflow)?
        / U256::from(LIQUIDATION_PRECISION);
    let total_collateral = base_collateral
        .checked_add(bonus_collateral)
        .ok_or(EngineError::ArithmeticOverflow)?;
    Ok(LiquidationQuote {
        base_collateral,
        bonus_collateral,
        total_collateral,
    })
}

/// The repayment must not exceed the debtor's debt.
pub fn check_repayment(debt_to_cover: U256, debtor_debt: U256) -> Result<(), EngineError> {
    if debt_to_cover > debtor_debt {
        return Err(EngineError::BurnExceedsDebt);
    }
    Ok(())
}

/// The seized collateral must be covered by the debtor's deposit.
pub fn check_seizure(quote: &LiquidationQuote, debtor_collateral: U256) -> Result<(), EngineError> {
    if quote.total_collateral > debtor_collateral {
        return Err(EngineError::InsufficientCollateral);
    }
    Ok(())
}
