//! Precondition guards shared by engine entry points.
//!
//! Each guard is a plain function returning `Result`; entry points call them
//! explicitly before touching storage and revert with the returned error.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::EngineError;
use crate::types::is_null_address;

/// Maximum number of assets accepted by a single batch registration
pub const MAX_BATCH_SIZE: usize = 20;

pub fn amount_positive(amount: U256) -> Result<(), EngineError> {
    if amount.is_zero() {
        return Err(EngineError::AmountMustBePositive);
    }
    Ok(())
}

pub fn non_null(address: &Address) -> Result<(), EngineError> {
    if is_null_address(address) {
        return Err(EngineError::InvalidAddress);
    }
    Ok(())
}

/// Validate paired registration lists.
pub fn batch_shape(assets: usize, price_feeds: usize) -> Result<(), EngineError> {
    if assets != price_feeds {
        return Err(EngineError::LengthMismatch);
    }
    if assets == 0 || assets > MAX_BATCH_SIZE {
        return Err(EngineError::InvalidBatchSize);
    }
    Ok(())
}
