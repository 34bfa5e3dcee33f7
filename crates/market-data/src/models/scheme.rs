//! Scheme metadata models.

use serde::{Deserialize, Serialize};

/// First published NAV of a scheme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeStartDate {
    /// Date as published by the provider ("dd-mm-yyyy")
    pub date: String,

    /// NAV on that date, verbatim
    pub nav: String,
}

/// Scheme metadata from the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeDetails {
    /// Asset management company (e.g., "SBI Mutual Fund")
    pub fund_house: String,

    /// Scheme type (e.g., "Open Ended Schemes")
    pub scheme_type: String,

    /// SEBI category (e.g., "Equity Scheme - Large Cap Fund")
    pub scheme_category: String,

    /// AMFI scheme code
    pub scheme_code: String,

    /// Full scheme name
    pub scheme_name: String,

    /// Oldest NAV the provider knows about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_start_date: Option<SchemeStartDate>,
}

impl SchemeDetails {
    /// Ordered `(label, value)` pairs for display.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("fund_house", self.fund_house.clone()),
            ("scheme_type", self.scheme_type.clone()),
            ("scheme_category", self.scheme_category.clone()),
            ("scheme_code", self.scheme_code.clone()),
            ("scheme_name", self.scheme_name.clone()),
        ];
        if let Some(start) = &self.scheme_start_date {
            fields.push((
                "scheme_start_date",
                format!("{} (NAV {})", start.date, start.nav),
            ));
        }
        fields
    }
}
