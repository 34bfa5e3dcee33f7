/// Trading days used to annualize daily figures
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Annual risk-free rate used for the Sharpe ratio
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.06;

/// AMC pre-filled in the scheme listing view
pub const DEFAULT_AMC: &str = "SBI";

/// Quarter pre-filled in the AUM view
pub const DEFAULT_AUM_PERIOD: &str = "July - September 2024";

pub const NO_SCHEMES_FOUND: &str = "No Schemes Found";
pub const NO_DATA_AVAILABLE: &str = "No Data Available.";
pub const SELECT_AT_LEAST_ONE_SCHEME: &str = "Please select at least one scheme";
