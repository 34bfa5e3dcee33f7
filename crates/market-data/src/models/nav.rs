use serde::{Deserialize, Serialize};

/// One historical NAV row as the provider publishes it.
///
/// Rows arrive most-recent-first. Values are kept verbatim; parsing and
/// cleaning belong to the consumer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNavRow {
    /// Date string, day-first ("dd-mm-yyyy")
    pub date: String,

    /// NAV string; may be non-numeric for suspended schemes
    pub nav: String,

    /// `nav - next_older_nav`; absent for the oldest row or when either
    /// side is non-numeric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_change: Option<f64>,
}

impl RawNavRow {
    /// Create a row without a day change.
    pub fn new(date: impl Into<String>, nav: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            nav: nav.into(),
            day_change: None,
        }
    }

    /// Fill `day_change` for rows ordered most-recent-first.
    pub fn with_day_changes(mut rows: Vec<RawNavRow>) -> Vec<RawNavRow> {
        let values: Vec<Option<f64>> = rows
            .iter()
            .map(|r| r.nav.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
            .collect();

        for (i, row) in rows.iter_mut().enumerate() {
            row.day_change = match (values[i], values.get(i + 1).copied().flatten()) {
                (Some(current), Some(previous)) => Some(current - previous),
                _ => None,
            };
        }
        rows
    }
}
