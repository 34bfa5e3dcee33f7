//! Core error types for the dashboard.
//!
//! Empty provider answers are not represented here; views turn them into
//! [`crate::views::Panel::NoData`].

use mfdash_market_data::MarketDataError;
use thiserror::Error;

use crate::risk::RiskError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for dashboard operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Risk calculation failed: {0}")]
    Risk(#[from] RiskError),

    #[error("Unknown scheme: {0}")]
    UnknownScheme(String),

    #[error("Input validation failed: {0}")]
    Validation(String),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than by
    /// the upstream provider.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnknownScheme(_) | Self::Validation(_))
    }
}
