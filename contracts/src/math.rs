//! Fixed-point price math.
//!
//! All USD amounts and prices are carried at 18 decimals. Price sources may
//! report any precision up to 18 decimals; quotes are scaled up to the
//! canonical precision before use.

use odra::casper_types::U256;
use crate::errors::EngineError;

/// Canonical fixed-point precision (1e18)
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// Canonical decimal count
pub const CANONICAL_DECIMALS: u8 = 18;

/// Milliseconds per second (host block time is in milliseconds)
pub const MILLIS_PER_SECOND: u64 = 1_000;

/// `10^exp` as U256.
pub fn pow10(exp: u8) -> U256 {
    U256::from(10u64).pow(U256::from(exp))
}

/// Scale a raw feed answer to 18 decimals.
pub fn normalize_price(answer: U256, feed_decimals: u8) -> Result<U256, EngineError> {
    if feed_decimals > CANONICAL_DECIMALS {
        return Err(EngineError::InvalidFeedDecimals);
    }
    if answer.is_zero() {
        return Err(EngineError::InvalidPrice);
    }
    answer
        .checked_mul(pow10(CANONICAL_DECIMALS - feed_decimals))
        .ok_or(EngineError::InvalidPrice)
}

/// USD value (18 decimals) of `amount` tokens at `price`.
pub fn usd_value(price: U256, amount: U256) -> Result<U256, EngineError> {
    price
        .checked_mul(amount)
        .map(|scaled| scaled / U256::from(PRECISION))
        .ok_or(EngineError::ArithmeticOverflow)
}

/// Token amount worth `usd_amount` at `price`.
pub fn token_amount_from_usd(price: U256, usd_amount: U256) -> Result<U256, EngineError> {
    if price.is_zero() {
        return Err(EngineError::InvalidPrice);
    }
    usd_amount
        .checked_mul(U256::from(PRECISION))
        .map(|scaled| scaled / price)
        .ok_or(EngineError::ArithmeticOverflow)
}

/// Whether a quote taken at `updated_at` is older than `max_age` at `now`.
///
/// A quote exactly `max_age` seconds old is still fresh. Quotes stamped in
/// the future count as age zero.
pub fn is_stale(now_secs: u64, updated_at: u64, max_age: u64) -> bool {
    now_secs.saturating_sub(updated_at) > max_age
}
