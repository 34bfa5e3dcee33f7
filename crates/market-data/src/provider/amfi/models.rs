//! mfapi.in response models.
//!
//! `GET /mf/{code}` answers `{"meta": {...}, "data": [...], "status": "..."}`.
//! Unknown codes come back with an empty `meta` object and no data, so every
//! field is optional.

use serde::Deserialize;
use serde_json::Value;

use crate::models::{RawNavRow, SchemeDetails, SchemeStartDate};

/// Top-level mfapi.in scheme response
#[derive(Debug, Default, Deserialize)]
pub struct MfApiSchemeResponse {
    #[serde(default)]
    pub meta: Option<MfApiMeta>,
    #[serde(default)]
    pub data: Vec<MfApiNavPoint>,
}

/// Scheme metadata block
#[derive(Debug, Default, Deserialize)]
pub struct MfApiMeta {
    #[serde(default)]
    pub fund_house: Option<String>,
    #[serde(default)]
    pub scheme_type: Option<String>,
    #[serde(default)]
    pub scheme_category: Option<String>,
    // Published as a number, occasionally as a string
    #[serde(default)]
    pub scheme_code: Option<Value>,
    #[serde(default)]
    pub scheme_name: Option<String>,
}

/// One NAV point, most-recent-first
#[derive(Debug, Deserialize)]
pub struct MfApiNavPoint {
    pub date: String,
    pub nav: String,
}

impl MfApiSchemeResponse {
    /// Parse a response body, treating anything that is not a JSON object
    /// (e.g. `[]` for unknown codes) as an empty answer.
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
    }

    /// NAV rows with day changes filled in.
    pub fn nav_rows(&self) -> Vec<RawNavRow> {
        let rows = self
            .data
            .iter()
            .map(|p| RawNavRow::new(p.date.trim(), p.nav.trim()))
            .collect();
        RawNavRow::with_day_changes(rows)
    }

    /// Scheme details, or `None` when the response describes no scheme.
    pub fn details(&self) -> Option<SchemeDetails> {
        let meta = self.meta.as_ref()?;
        let scheme_name = meta.scheme_name.clone().filter(|n| !n.trim().is_empty())?;
        let scheme_code = match &meta.scheme_code {
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        };

        Some(SchemeDetails {
            fund_house: meta.fund_house.clone().unwrap_or_default(),
            scheme_type: meta.scheme_type.clone().unwrap_or_default(),
            scheme_category: meta.scheme_category.clone().unwrap_or_default(),
            scheme_code,
            scheme_name,
            scheme_start_date: self.data.last().map(|p| SchemeStartDate {
                date: p.date.clone(),
                nav: p.nav.clone(),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "meta": {
            "fund_house": "SBI Mutual Fund",
            "scheme_type": "Open Ended Schemes",
            "scheme_category": "Equity Scheme - Large Cap Fund",
            "scheme_code": 119598,
            "scheme_name": "SBI Bluechip Fund - Direct Plan - Growth"
        },
        "data": [
            {"date": "18-10-2024", "nav": "98.12340"},
            {"date": "17-10-2024", "nav": "97.62340"},
            {"date": "02-01-2013", "nav": "16.40600"}
        ],
        "status": "SUCCESS"
    }"#;

    #[test]
    fn test_parse_details() {
        let response = MfApiSchemeResponse::from_body(SAMPLE).unwrap();
        let details = response.details().unwrap();
        assert_eq!(details.fund_house, "SBI Mutual Fund");
        assert_eq!(details.scheme_code, "119598");
        assert_eq!(
            details.scheme_start_date,
            Some(SchemeStartDate {
                date: "02-01-2013".to_string(),
                nav: "16.40600".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_nav_rows_with_day_change() {
        let response = MfApiSchemeResponse::from_body(SAMPLE).unwrap();
        let rows = response.nav_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].date, "18-10-2024");
        let change = rows[0].day_change.unwrap();
        assert!((change - 0.5).abs() < 1e-9);
        assert!(rows[2].day_change.is_none());
    }

    #[test]
    fn test_unknown_code_is_empty() {
        let response =
            MfApiSchemeResponse::from_body(r#"{"meta": {}, "data": [], "status": "SUCCESS"}"#)
                .unwrap();
        assert!(response.details().is_none());
        assert!(response.nav_rows().is_empty());

        let response = MfApiSchemeResponse::from_body("[]").unwrap();
        assert!(response.details().is_none());
        assert!(response.nav_rows().is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(MfApiSchemeResponse::from_body("<html>").is_err());
    }
}
