use thiserror::Error;

/// Numeric edge cases of the risk calculation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RiskError {
    #[error("Insufficient data: need at least {required} NAV records, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Volatility is zero; Sharpe ratio is undefined")]
    ZeroVolatility,

    #[error("Non-positive NAV on {date}")]
    NonPositiveNav { date: String },

    #[error("Return on {date} is outside the representable range")]
    ReturnOverflow { date: String },
}
