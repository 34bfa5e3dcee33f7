use mfdash_market_data::AaumRecord;
use serde::Serialize;
use serde_json::json;

use super::panel::Panel;

/// Combined domestic and overseas AAUM for one fund house.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AumTotal {
    pub fund_name: String,
    pub total_aum: f64,
}

/// Parse a published AAUM figure such as `"1,23,456.78"`. Blank or
/// non-numeric figures are missing.
pub fn parse_aum_figure(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Domestic plus overseas per fund house; a missing side counts as zero.
pub fn aum_totals(records: &[AaumRecord]) -> Vec<AumTotal> {
    records
        .iter()
        .map(|r| AumTotal {
            fund_name: r.fund_name.clone(),
            total_aum: parse_aum_figure(&r.aaum_domestic).unwrap_or(0.0)
                + parse_aum_figure(&r.aaum_overseas).unwrap_or(0.0),
        })
        .collect()
}

pub fn aum_table(title: &str, totals: &[AumTotal]) -> Panel {
    Panel::Table {
        title: title.to_string(),
        columns: vec!["Fund Name".to_string(), "Total AUM".to_string()],
        rows: totals
            .iter()
            .map(|t| vec![json!(t.fund_name), json!(t.total_aum)])
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, domestic: &str, overseas: &str) -> AaumRecord {
        AaumRecord {
            fund_name: name.to_string(),
            aaum_domestic: domestic.to_string(),
            aaum_overseas: overseas.to_string(),
        }
    }

    #[test]
    fn test_parse_aum_figure() {
        assert_eq!(parse_aum_figure("1,23,456.78"), Some(123456.78));
        assert_eq!(parse_aum_figure(" 12.5 "), Some(12.5));
        assert_eq!(parse_aum_figure(""), None);
        assert_eq!(parse_aum_figure("-"), None);
    }

    #[test]
    fn test_totals_sum_both_sides() {
        let totals = aum_totals(&[
            record("SBI Mutual Fund", "1,000.50", "99.50"),
            record("Quant Mutual Fund", "250", ""),
            record("Empty AMC", "", "n/a"),
        ]);

        assert_eq!(totals[0].total_aum, 1100.0);
        assert_eq!(totals[1].total_aum, 250.0);
        assert_eq!(totals[2].total_aum, 0.0);
    }

    #[test]
    fn test_table_columns() {
        let panel = aum_table("AUM", &aum_totals(&[record("SBI Mutual Fund", "10", "5")]));
        let Panel::Table { columns, rows, .. } = panel else {
            panic!("expected table");
        };
        assert_eq!(columns, vec!["Fund Name", "Total AUM"]);
        assert_eq!(rows[0][1], json!(15.0));
    }
}
