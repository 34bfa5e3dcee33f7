use serde::{Deserialize, Serialize};

/// Average assets under management for one fund house in one quarter.
///
/// Figures are kept as published (in lakhs, possibly with thousands
/// separators).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AaumRecord {
    /// Fund house name
    pub fund_name: String,

    /// AAUM from domestic schemes
    pub aaum_domestic: String,

    /// AAUM from fund-of-funds investing overseas
    pub aaum_overseas: String,
}
