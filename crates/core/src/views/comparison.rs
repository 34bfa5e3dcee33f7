use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde_json::json;

use super::panel::Figure;
use crate::nav::NavSeries;

/// NAV series for several schemes aligned on the union of their dates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComparisonFrame {
    dates: Vec<NaiveDate>,
    columns: Vec<(String, Vec<Option<f64>>)>,
}

impl ComparisonFrame {
    /// Align `series` (label, interpolated series) on a shared ascending
    /// date axis. Dates a scheme has no value for are left empty.
    pub fn from_series(series: Vec<(String, NavSeries)>) -> Self {
        let dates: BTreeSet<NaiveDate> = series
            .iter()
            .flat_map(|(_, s)| s.records().iter().map(|r| r.date))
            .collect();
        let dates: Vec<NaiveDate> = dates.into_iter().collect();

        let columns = series
            .into_iter()
            .map(|(label, s)| {
                let by_date: BTreeMap<NaiveDate, f64> = s
                    .records()
                    .iter()
                    .map(|r| (r.date, r.nav_f64()))
                    .collect();
                let values = dates.iter().map(|d| by_date.get(d).copied()).collect();
                (label, values)
            })
            .collect();

        Self { dates, columns }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn column(&self, label: &str) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// One line trace per scheme.
    pub fn to_figure(&self, title: &str) -> Figure {
        let x: Vec<String> = self
            .dates
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect();

        let data = self
            .columns
            .iter()
            .map(|(label, values)| {
                json!({
                    "type": "scatter",
                    "mode": "lines",
                    "name": label,
                    "x": x,
                    "y": values,
                    "connectgaps": true,
                })
            })
            .collect();

        Figure {
            data,
            layout: json!({
                "title": {"text": title},
                "xaxis": {"title": {"text": "date"}},
                "yaxis": {"title": {"text": "value"}},
                "legend": {"title": {"text": "variable"}},
            }),
        }
    }
}
