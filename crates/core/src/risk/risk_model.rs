use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::risk_errors::RiskError;

/// Day-over-day return ending on `date`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRecord {
    pub date: NaiveDate,
    #[serde(rename = "return")]
    pub daily_return: f64,
}

/// Annualized risk figures for one scheme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    /// Sample standard deviation of daily returns, annualized
    pub annualized_volatility: f64,
    /// Mean daily return compounded over a trading year
    pub annualized_return: f64,
    pub risk_free_rate: f64,
    /// Daily returns, most recent first
    pub returns: Vec<ReturnRecord>,
}

impl RiskReport {
    /// Excess annualized return per unit of annualized volatility.
    pub fn sharpe_ratio(&self) -> Result<f64, RiskError> {
        if self.annualized_volatility == 0.0 || !self.annualized_volatility.is_finite() {
            return Err(RiskError::ZeroVolatility);
        }
        Ok((self.annualized_return - self.risk_free_rate) / self.annualized_volatility)
    }
}
