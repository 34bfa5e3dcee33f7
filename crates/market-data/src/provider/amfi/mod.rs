//! AMFI mutual fund data provider.
//!
//! This provider combines three public sources:
//! - AMFI `NAVAll.txt` for the full scheme list
//! - mfapi.in for NAV history and scheme metadata
//! - the AMFI "Average AUM" page for quarterly AAUM per fund house
//!
//! None of them needs an API key. No request is retried or cached.

mod models;

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{AaumRecord, RawNavRow, SchemeCode, SchemeDetails, SchemeName};
use crate::provider::MutualFundProvider;

use models::MfApiSchemeResponse;

const PROVIDER_ID: &str = "AMFI";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0.0.0 Safari/537.36";

/// Upstream URLs used by [`AmfiProvider`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmfiEndpoints {
    /// Semicolon-separated list of every scheme with its latest NAV
    pub nav_all_url: String,

    /// mfapi.in base; the scheme code is appended as a path segment
    pub mfapi_base_url: String,

    /// AMFI average AUM form endpoint (HTML table response)
    pub aaum_url: String,
}

impl Default for AmfiEndpoints {
    fn default() -> Self {
        Self {
            nav_all_url: "https://www.amfiindia.com/spages/NAVAll.txt".to_string(),
            mfapi_base_url: "https://api.mfapi.in/mf".to_string(),
            aaum_url: "https://www.amfiindia.com/modules/AverageAUMDetails".to_string(),
        }
    }
}

/// AMFI / mfapi.in provider.
pub struct AmfiProvider {
    client: Client,
    endpoints: AmfiEndpoints,
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers
}

impl AmfiProvider {
    /// Create a provider against the public endpoints.
    pub fn new() -> Self {
        Self::with_endpoints(AmfiEndpoints::default())
    }

    /// Create a provider against custom endpoints.
    pub fn with_endpoints(endpoints: AmfiEndpoints) -> Self {
        let client = Client::builder()
            .default_headers(default_headers())
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, endpoints }
    }

    /// The endpoints this provider talks to.
    pub fn endpoints(&self) -> &AmfiEndpoints {
        &self.endpoints
    }

    /// Turn a response into its body, mapping failure statuses to errors.
    async fn read_body(response: reqwest::Response) -> Result<String, MarketDataError> {
        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::from_send(PROVIDER_ID, e))
    }

    async fn get_text(&self, url: &str) -> Result<String, MarketDataError> {
        debug!("AMFI request: GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MarketDataError::from_send(PROVIDER_ID, e))?;
        Self::read_body(response).await
    }

    async fn fetch_scheme(&self, code: &str) -> Result<MfApiSchemeResponse, MarketDataError> {
        let code = code.trim();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
            debug!("Skipping mfapi lookup for malformed scheme code {:?}", code);
            return Ok(MfApiSchemeResponse::default());
        }

        let url = format!("{}/{}", self.endpoints.mfapi_base_url.trim_end_matches('/'), code);
        let body = self.get_text(&url).await?;
        MfApiSchemeResponse::from_body(&body).map_err(|e| MarketDataError::ParseError {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to parse mfapi response for {}: {}", code, e),
        })
    }
}

impl Default for AmfiProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse AMFI `NAVAll.txt` into `code -> name`.
///
/// Data lines have six `;`-separated columns:
/// `Scheme Code;ISIN Div Payout/ISIN Growth;ISIN Div Reinvestment;Scheme Name;Net Asset Value;Date`.
/// Section titles, fund house names, blank lines and the header are skipped.
pub(crate) fn parse_nav_all(text: &str) -> BTreeMap<SchemeCode, SchemeName> {
    text.lines()
        .filter_map(|line| {
            let columns: Vec<&str> = line.split(';').collect();
            if columns.len() != 6 {
                return None;
            }
            let code = columns[0].trim();
            let name = columns[3].trim();
            if code.is_empty() || name.is_empty() || !code.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            Some((code.to_string(), name.to_string()))
        })
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse the AMFI average AUM HTML table.
///
/// Each body row is `Fund Name | AAUM Domestic | AAUM Overseas`; rows with
/// fewer cells (group headings, spacers) are skipped.
pub(crate) fn parse_aaum_table(html: &str) -> Result<Vec<AaumRecord>, MarketDataError> {
    let selector_error = |e: String| MarketDataError::ParseError {
        provider: PROVIDER_ID.to_string(),
        message: format!("Invalid selector: {}", e),
    };
    let row_selector = Selector::parse("table tbody tr").map_err(|e| selector_error(e.to_string()))?;
    let cell_selector = Selector::parse("td").map_err(|e| selector_error(e.to_string()))?;

    let document = Html::parse_document(html);
    let records = document
        .select(&row_selector)
        .filter_map(|row| {
            let cells: Vec<String> = row.select(&cell_selector).map(cell_text).collect();
            if cells.len() < 3 || cells[0].is_empty() {
                return None;
            }
            Some(AaumRecord {
                fund_name: cells[0].clone(),
                aaum_domestic: cells[1].clone(),
                aaum_overseas: cells[2].clone(),
            })
        })
        .collect();

    Ok(records)
}

#[async_trait]
impl MutualFundProvider for AmfiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_scheme_codes(&self) -> Result<BTreeMap<SchemeCode, SchemeName>, MarketDataError> {
        let text = self.get_text(&self.endpoints.nav_all_url).await?;
        let schemes = parse_nav_all(&text);
        if schemes.is_empty() {
            warn!("AMFI scheme list parsed to zero schemes");
        }
        debug!("AMFI scheme list: {} schemes", schemes.len());
        Ok(schemes)
    }

    async fn get_scheme_details(
        &self,
        code: &str,
    ) -> Result<Option<SchemeDetails>, MarketDataError> {
        Ok(self.fetch_scheme(code).await?.details())
    }

    async fn get_historical_nav(&self, code: &str) -> Result<Vec<RawNavRow>, MarketDataError> {
        let rows = self.fetch_scheme(code).await?.nav_rows();
        debug!("mfapi NAV history for {}: {} rows", code, rows.len());
        Ok(rows)
    }

    async fn get_average_aum(&self, period: &str) -> Result<Vec<AaumRecord>, MarketDataError> {
        let period = period.trim();
        if period.is_empty() {
            return Ok(Vec::new());
        }

        let form = [
            ("AUmType", "F"),
            ("AumCatType", "Typewise"),
            ("MF_Id", "-1"),
            ("Year_Quarter", period),
        ];
        debug!("AMFI request: POST {} ({})", self.endpoints.aaum_url, period);
        let response = self
            .client
            .post(&self.endpoints.aaum_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| MarketDataError::from_send(PROVIDER_ID, e))?;
        let html = Self::read_body(response).await?;
        parse_aaum_table(&html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAV_ALL: &str = "Scheme Code;ISIN Div Payout/ ISIN Growth;ISIN Div Reinvestment;Scheme Name;Net Asset Value;Date\r
\r
Open Ended Schemes(Equity Scheme - Large Cap Fund)\r
\r
SBI Mutual Fund\r
\r
119598;INF200K01QX4;-;SBI Bluechip Fund - Direct Plan - Growth;98.1234;18-Oct-2024\r
103504;INF200K01180;-;SBI Bluechip Fund - Regular Plan - Growth;88.4321;18-Oct-2024\r
\r
HDFC Mutual Fund\r
119018;INF179K01XQ0;-;HDFC Top 100 Fund - Direct Plan - Growth;1200.55;18-Oct-2024\r
";

    #[test]
    fn test_parse_nav_all_skips_non_data_lines() {
        let schemes = parse_nav_all(NAV_ALL);
        assert_eq!(schemes.len(), 3);
        assert_eq!(
            schemes.get("119598").map(String::as_str),
            Some("SBI Bluechip Fund - Direct Plan - Growth")
        );
        assert!(!schemes.contains_key("Scheme Code"));
    }

    #[test]
    fn test_parse_nav_all_empty() {
        assert!(parse_nav_all("").is_empty());
        assert!(parse_nav_all("<html>maintenance</html>").is_empty());
    }

    #[test]
    fn test_parse_aaum_table() {
        let html = r#"
            <html><body>
            <table>
              <thead><tr><th>Mutual Fund Name</th><th>Domestic</th><th>Overseas</th></tr></thead>
              <tbody>
                <tr><td colspan="3">Bank Sponsored</td></tr>
                <tr><td> SBI Mutual Fund </td><td>10,45,123.45</td><td>1,234.50</td></tr>
                <tr><td>HDFC Mutual Fund</td><td>7,12,000.00</td><td>0.00</td></tr>
              </tbody>
            </table>
            </body></html>
        "#;

        let records = parse_aaum_table(html).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fund_name, "SBI Mutual Fund");
        assert_eq!(records[0].aaum_domestic, "10,45,123.45");
        assert_eq!(records[0].aaum_overseas, "1,234.50");
        assert_eq!(records[1].fund_name, "HDFC Mutual Fund");
    }

    #[test]
    fn test_parse_aaum_table_without_rows() {
        let records = parse_aaum_table("<html><body><p>No data</p></body></html>").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_provider_id() {
        let provider = AmfiProvider::new();
        assert_eq!(provider.id(), "AMFI");
    }

    #[test]
    fn test_default_endpoints() {
        let provider = AmfiProvider::default();
        assert_eq!(provider.endpoints().mfapi_base_url, "https://api.mfapi.in/mf");
    }

    #[tokio::test]
    async fn test_blank_amc_matches_nothing_without_network() {
        let provider = AmfiProvider::with_endpoints(AmfiEndpoints {
            nav_all_url: "http://127.0.0.1:9/unreachable".to_string(),
            ..AmfiEndpoints::default()
        });
        let schemes = provider.list_schemes("   ").await.unwrap();
        assert!(schemes.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_code_is_empty_without_network() {
        let provider = AmfiProvider::with_endpoints(AmfiEndpoints {
            mfapi_base_url: "http://127.0.0.1:9/unreachable".to_string(),
            ..AmfiEndpoints::default()
        });
        assert!(provider.get_historical_nav("not-a-code").await.unwrap().is_empty());
        assert!(provider.get_scheme_details("").await.unwrap().is_none());
    }
}
