use serde_json::json;

use super::panel::{Figure, MetricItem};
use crate::risk::RiskReport;

/// Volatility and return as percentages, Sharpe to two decimals or
/// "undefined" when volatility is zero.
pub fn risk_metrics(report: &RiskReport) -> Vec<MetricItem> {
    let sharpe = match report.sharpe_ratio() {
        Ok(value) => format!("{value:.2}"),
        Err(_) => "undefined".to_string(),
    };

    vec![
        MetricItem::new(
            "Annualized volatility",
            format!("{:.2}%", report.annualized_volatility * 100.0),
        ),
        MetricItem::new(
            "Annualized return",
            format!("{:.2}%", report.annualized_return * 100.0),
        ),
        MetricItem::new("Sharpe ratio", sharpe),
    ]
}

/// Daily returns over time.
pub fn risk_scatter(scheme_label: &str, report: &RiskReport) -> Figure {
    let x: Vec<String> = report
        .returns
        .iter()
        .map(|r| r.date.format("%Y-%m-%d").to_string())
        .collect();
    let y: Vec<f64> = report.returns.iter().map(|r| r.daily_return).collect();

    Figure {
        data: vec![json!({
            "type": "scatter",
            "mode": "markers",
            "x": x,
            "y": y,
        })],
        layout: json!({
            "title": {"text": format!("Risk-Return Scatter for {scheme_label}")},
            "xaxis": {"title": {"text": "Date"}},
            "yaxis": {"title": {"text": "Daily Returns"}},
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::ReturnRecord;
    use chrono::NaiveDate;

    fn report(volatility: f64, annual_return: f64) -> RiskReport {
        RiskReport {
            annualized_volatility: volatility,
            annualized_return: annual_return,
            risk_free_rate: 0.06,
            returns: vec![ReturnRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                daily_return: 0.01,
            }],
        }
    }

    #[test]
    fn test_metrics_formatting() {
        let metrics = risk_metrics(&report(0.2, 0.16));
        assert_eq!(metrics[0].value, "20.00%");
        assert_eq!(metrics[1].value, "16.00%");
        assert_eq!(metrics[2].value, "0.50");
    }

    #[test]
    fn test_zero_volatility_sharpe_is_undefined() {
        let metrics = risk_metrics(&report(0.0, 0.0));
        assert_eq!(metrics[0].value, "0.00%");
        assert_eq!(metrics[2].value, "undefined");
    }

    #[test]
    fn test_scatter() {
        let figure = risk_scatter("SBI Bluechip", &report(0.2, 0.1));
        assert_eq!(figure.data[0]["mode"], "markers");
        assert_eq!(figure.data[0]["x"][0], "2024-01-02");
        assert_eq!(
            figure.layout["title"]["text"],
            "Risk-Return Scatter for SBI Bluechip"
        );
    }
}
