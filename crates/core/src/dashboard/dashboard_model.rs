use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_AMC, DEFAULT_AUM_PERIOD, DEFAULT_RISK_FREE_RATE};

/// Inputs the dashboard falls back to when a request leaves them out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSettings {
    pub default_amc: String,
    pub default_aum_period: String,
    /// Annual rate, e.g. 0.06 for 6%
    pub risk_free_rate: f64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_amc: DEFAULT_AMC.to_string(),
            default_aum_period: DEFAULT_AUM_PERIOD.to_string(),
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
        }
    }
}
