//! Engine error definitions.

use odra::prelude::*;

/// Stablecoin engine errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EngineError {
    // Validation errors (1xx)
    AmountMustBePositive = 100,
    InvalidAddress = 101,
    LengthMismatch = 102,
    InvalidBatchSize = 103,
    InvalidConfig = 104,
    InvalidFeedDecimals = 105,
    ArithmeticOverflow = 106,

    // Oracle errors (2xx)
    StalePrice = 200,
    InvalidPrice = 201,

    // Solvency errors (3xx)
    UnhealthyPosition = 300,
    CannotLiquidateHealthyPosition = 301,
    InsufficientCollateral = 302,
    BurnExceedsDebt = 303,

    // Access errors (4xx)
    Unauthorized = 400,
    ReentrantCall = 401,

    // Collaborator errors (5xx)
    TransferFailed = 500,
    MintFailed = 501,
    BurnFailed = 502,

    // Registry errors (6xx)
    AssetNotAccepted = 600,
    AssetNotRegistered = 601,
    CannotRemoveLastAsset = 602,
    AssetHasActiveBalance = 603,
}

impl EngineError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Validation
            EngineError::AmountMustBePositive => "Amount must be greater than zero",
            EngineError::InvalidAddress => "Invalid (null) address",
            EngineError::LengthMismatch => "Asset and price feed lists differ in length",
            EngineError::InvalidBatchSize => "Batch is empty or too large",
            EngineError::InvalidConfig => "Invalid configuration parameter",
            EngineError::InvalidFeedDecimals => "Price feed decimals exceed 18",
            EngineError::ArithmeticOverflow => "Amount too large",

            // Oracle
            EngineError::StalePrice => "Price quote is stale",
            EngineError::InvalidPrice => "Price quote is zero",

            // Solvency
            EngineError::UnhealthyPosition => "Health factor below minimum",
            EngineError::CannotLiquidateHealthyPosition => "Position is healthy",
            EngineError::InsufficientCollateral => "Amount exceeds deposited collateral",
            EngineError::BurnExceedsDebt => "Amount exceeds minted debt",

            // Access
            EngineError::Unauthorized => "Unauthorized: caller is not admin",
            EngineError::ReentrantCall => "Reentrant call",

            // Collaborators
            EngineError::TransferFailed => "Token transfer failed",
            EngineError::MintFailed => "Token mint failed",
            EngineError::BurnFailed => "Token burn failed",

            // Registry
            EngineError::AssetNotAccepted => "Collateral asset not accepted",
            EngineError::AssetNotRegistered => "Collateral asset not registered",
            EngineError::CannotRemoveLastAsset => "Cannot drop below minimum asset count",
            EngineError::AssetHasActiveBalance => "Asset still held in custody",
        }
    }

    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<EngineError> for OdraError {
    fn from(error: EngineError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
