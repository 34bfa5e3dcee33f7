use std::collections::HashSet;
use std::str::FromStr;

use chrono::NaiveDate;
use mfdash_market_data::RawNavRow;
use rust_decimal::Decimal;

use super::nav_model::{NavOrder, NavRecord, NavSeries};

/// Day-first formats accepted for NAV dates.
const DATE_FORMATS: [&str; 4] = ["%d-%m-%Y", "%d/%m/%Y", "%d-%b-%Y", "%d.%m.%Y"];

/// Parse a day-first NAV date.
pub fn parse_nav_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Parse a NAV figure. Thousands separators are ignored; negative or
/// non-numeric values are treated as missing.
pub fn parse_nav_value(raw: &str) -> Option<Decimal> {
    let cleaned = raw.trim().replace(',', "");
    Decimal::from_str(&cleaned)
        .ok()
        .filter(|v| !v.is_sign_negative())
}

/// Parse dates and values, dropping rows whose date is unusable and
/// duplicate dates after the first.
fn parse_rows(rows: &[RawNavRow]) -> Vec<(NaiveDate, Option<Decimal>)> {
    let mut seen = HashSet::new();
    rows.iter()
        .filter_map(|row| {
            let date = parse_nav_date(&row.date)?;
            seen.insert(date)
                .then(|| (date, parse_nav_value(&row.nav)))
        })
        .collect()
}

/// Drop policy: rows with a missing NAV are removed and provider order
/// (most recent first) is kept. Zero stays in the series; the risk
/// calculator rejects it explicitly.
pub fn clean_dropping_missing(rows: &[RawNavRow]) -> NavSeries {
    let records = parse_rows(rows)
        .into_iter()
        .filter_map(|(date, nav)| nav.map(|nav| NavRecord::new(date, nav)))
        .collect();
    NavSeries::new(NavOrder::Native, records)
}

/// Interpolate policy: zero and non-numeric NAVs are missing. The series is
/// sorted oldest first, interior gaps are filled linearly by position,
/// trailing gaps repeat the last valid value and leading gaps are dropped.
pub fn clean_interpolating_gaps(rows: &[RawNavRow]) -> NavSeries {
    let mut parsed = parse_rows(rows);
    parsed.sort_by_key(|(date, _)| *date);

    let values: Vec<Option<Decimal>> = parsed
        .iter()
        .map(|(_, nav)| nav.filter(|v| !v.is_zero()))
        .collect();

    let mut records = Vec::with_capacity(parsed.len());
    let mut previous: Option<(usize, Decimal)> = None;

    for (i, (date, _)) in parsed.iter().enumerate() {
        let nav = match values[i] {
            Some(value) => {
                previous = Some((i, value));
                value
            }
            None => {
                let Some((prev_idx, prev_val)) = previous else {
                    continue;
                };
                let next = values[i + 1..]
                    .iter()
                    .enumerate()
                    .find_map(|(offset, v)| v.map(|v| (i + 1 + offset, v)));

                match next {
                    Some((next_idx, next_val)) => {
                        let step = Decimal::from((i - prev_idx) as u64)
                            / Decimal::from((next_idx - prev_idx) as u64);
                        prev_val + (next_val - prev_val) * step
                    }
                    None => prev_val,
                }
            }
        };
        records.push(NavRecord::new(*date, nav));
    }

    NavSeries::new(NavOrder::Ascending, records)
}
