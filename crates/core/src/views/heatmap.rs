use std::collections::BTreeMap;

use chrono::Datelike;
use mfdash_market_data::RawNavRow;
use serde::Serialize;
use serde_json::json;

use super::panel::Figure;
use crate::nav::parse_nav_date;

/// Mean day change for one calendar month, pooled across years.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyChange {
    /// 1 = January
    pub month: u32,
    pub mean_day_change: f64,
}

/// Average `day_change` per calendar month, ascending by month. Rows with an
/// unparseable date or without a day change are ignored.
pub fn monthly_mean_day_change(rows: &[RawNavRow]) -> Vec<MonthlyChange> {
    let mut buckets: BTreeMap<u32, (f64, usize)> = BTreeMap::new();

    for row in rows {
        let (Some(date), Some(change)) = (parse_nav_date(&row.date), row.day_change) else {
            continue;
        };
        if !change.is_finite() {
            continue;
        }
        let entry = buckets.entry(date.month()).or_insert((0.0, 0));
        entry.0 += change;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(month, (sum, count))| MonthlyChange {
            month,
            mean_day_change: sum / count as f64,
        })
        .collect()
}

/// Density heatmap of month against mean day change, diverging around zero.
pub fn heatmap_figure(title: &str, months: &[MonthlyChange]) -> Figure {
    let x: Vec<String> = months.iter().map(|m| m.month.to_string()).collect();
    let y: Vec<f64> = months.iter().map(|m| m.mean_day_change).collect();

    Figure {
        data: vec![json!({
            "type": "histogram2d",
            "x": x,
            "y": y,
            "coloraxis": "coloraxis",
        })],
        layout: json!({
            "title": {"text": title},
            "xaxis": {"title": {"text": "month"}, "type": "category"},
            "yaxis": {"title": {"text": "dayChange"}},
            "coloraxis": {"cmid": 0, "colorbar": {"title": {"text": "count"}}},
        }),
    }
}
