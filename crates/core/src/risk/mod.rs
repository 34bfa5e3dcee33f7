//! Return and risk calculator.

mod risk_calculator;
mod risk_errors;
mod risk_model;

pub use risk_calculator::{compute_returns, compute_risk_report, MIN_RECORDS};
pub use risk_errors::RiskError;
pub use risk_model::{ReturnRecord, RiskReport};
