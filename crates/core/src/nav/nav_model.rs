use chrono::NaiveDate;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One cleaned NAV observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavRecord {
    pub date: NaiveDate,
    pub nav: Decimal,
}

impl NavRecord {
    pub fn new(date: NaiveDate, nav: Decimal) -> Self {
        Self { date, nav }
    }

    pub fn nav_f64(&self) -> f64 {
        self.nav.to_f64().unwrap_or(f64::NAN)
    }
}

/// Direction a [`NavSeries`] is ordered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavOrder {
    /// Provider order, most recent first
    Native,
    /// Oldest first
    Ascending,
}

/// A cleaned NAV series for one scheme. Dates are unique.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSeries {
    order: NavOrder,
    records: Vec<NavRecord>,
}

impl NavSeries {
    pub(crate) fn new(order: NavOrder, records: Vec<NavRecord>) -> Self {
        Self { order, records }
    }

    pub fn order(&self) -> NavOrder {
        self.order
    }

    pub fn records(&self) -> &[NavRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Same records, oldest first.
    pub fn into_ascending(mut self) -> Self {
        if self.order == NavOrder::Native {
            self.records.sort_by_key(|r| r.date);
            self.order = NavOrder::Ascending;
        }
        self
    }
}
