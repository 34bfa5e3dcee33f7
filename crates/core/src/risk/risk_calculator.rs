use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::risk_errors::RiskError;
use super::risk_model::{ReturnRecord, RiskReport};
use crate::constants::TRADING_DAYS_PER_YEAR;
use crate::nav::{NavRecord, NavSeries};

/// Smallest series that yields two returns, the minimum for a sample
/// standard deviation.
pub const MIN_RECORDS: usize = 3;

fn format_date(record: &NavRecord) -> String {
    record.date.format("%d-%m-%Y").to_string()
}

/// Day-over-day returns over a most-recent-first series:
/// `return[i] = nav[i] / nav[i + 1] - 1`. The oldest record has no return.
///
/// Every record after the first is a divisor and must be positive. The most
/// recent record is only a numerator, so a zero there yields a return of -1.
pub fn compute_returns(series: &NavSeries) -> Result<Vec<ReturnRecord>, RiskError> {
    let records = series.records();
    if let Some(bad) = records.iter().skip(1).find(|r| r.nav <= Decimal::ZERO) {
        return Err(RiskError::NonPositiveNav {
            date: format_date(bad),
        });
    }

    records
        .windows(2)
        .map(|pair| {
            let ratio = pair[0]
                .nav
                .checked_div(pair[1].nav)
                .and_then(|r| r.to_f64())
                .ok_or_else(|| RiskError::ReturnOverflow {
                    date: format_date(&pair[0]),
                })?;
            Ok(ReturnRecord {
                date: pair[0].date,
                daily_return: ratio - 1.0,
            })
        })
        .collect()
}

/// Annualized volatility, annualized return and the inputs for the Sharpe
/// ratio. `series` must be in provider order (most recent first).
pub fn compute_risk_report(
    series: &NavSeries,
    risk_free_rate: f64,
) -> Result<RiskReport, RiskError> {
    if series.len() < MIN_RECORDS {
        return Err(RiskError::InsufficientData {
            required: MIN_RECORDS,
            actual: series.len(),
        });
    }

    let returns = compute_returns(series)?;
    let values: Vec<f64> = returns.iter().map(|r| r.daily_return).collect();

    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (count - 1.0);

    let trading_days = f64::from(TRADING_DAYS_PER_YEAR);
    let annualized_volatility = variance.max(0.0).sqrt() * trading_days.sqrt();
    let annualized_return = (1.0 + mean).powf(trading_days) - 1.0;

    Ok(RiskReport {
        annualized_volatility,
        annualized_return,
        risk_free_rate,
        returns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::clean_dropping_missing;
    use mfdash_market_data::RawNavRow;

    fn native_series(navs: &[&str]) -> NavSeries {
        let rows: Vec<RawNavRow> = navs
            .iter()
            .enumerate()
            .map(|(i, nav)| RawNavRow::new(format!("{:02}-01-2024", 28 - i), *nav))
            .collect();
        clean_dropping_missing(&rows)
    }

    #[test]
    fn test_returns_are_backward_looking() {
        let series = native_series(&["100", "110", "121"]);
        let returns = compute_returns(&series).unwrap();

        assert_eq!(returns.len(), 2);
        for r in &returns {
            assert!((r.daily_return - (100.0 / 110.0 - 1.0)).abs() < 1e-12);
        }
        assert_eq!(returns[0].date, series.records()[0].date);
    }

    #[test]
    fn test_constant_geometric_series_has_zero_volatility() {
        let series = native_series(&["100", "110", "121"]);
        let report = compute_risk_report(&series, 0.06).unwrap();

        let expected_return = (1.0 + (100.0 / 110.0 - 1.0_f64)).powi(252) - 1.0;
        assert_eq!(report.annualized_volatility, 0.0);
        assert!((report.annualized_return - expected_return).abs() < 1e-9);
        assert_eq!(report.sharpe_ratio(), Err(RiskError::ZeroVolatility));
    }

    #[test]
    fn test_flat_series() {
        let series = native_series(&["50", "50", "50", "50"]);
        let report = compute_risk_report(&series, 0.06).unwrap();

        assert!(report.returns.iter().all(|r| r.daily_return == 0.0));
        assert_eq!(report.annualized_volatility, 0.0);
        assert_eq!(report.annualized_return, 0.0);
        assert_eq!(report.sharpe_ratio(), Err(RiskError::ZeroVolatility));
    }

    #[test]
    fn test_sharpe_ratio() {
        let series = native_series(&["103", "101", "102", "100"]);
        let report = compute_risk_report(&series, 0.06).unwrap();

        assert!(report.annualized_volatility > 0.0);
        let sharpe = report.sharpe_ratio().unwrap();
        let expected = (report.annualized_return - 0.06) / report.annualized_volatility;
        assert!((sharpe - expected).abs() < 1e-12);
    }

    #[test]
    fn test_short_series_is_insufficient() {
        for navs in [&[][..], &["100"][..], &["100", "101"][..]] {
            let series = native_series(navs);
            assert_eq!(
                compute_risk_report(&series, 0.06),
                Err(RiskError::InsufficientData {
                    required: MIN_RECORDS,
                    actual: navs.len(),
                })
            );
        }
    }

    #[test]
    fn test_zero_divisor_is_rejected() {
        let series = native_series(&["100", "0", "90"]);
        assert_eq!(
            compute_risk_report(&series, 0.06),
            Err(RiskError::NonPositiveNav {
                date: "27-01-2024".to_string()
            })
        );
    }

    #[test]
    fn test_zero_latest_nav_is_a_total_loss() {
        let series = native_series(&["0", "100", "90"]);
        let returns = compute_returns(&series).unwrap();
        assert_eq!(returns[0].daily_return, -1.0);
    }

    #[test]
    fn test_overflowing_ratio_is_an_error() {
        let series = native_series(&["99999999999999999999", "0.0000000001", "1"]);
        assert_eq!(
            compute_risk_report(&series, 0.06),
            Err(RiskError::ReturnOverflow {
                date: "28-01-2024".to_string()
            })
        );
    }
}
