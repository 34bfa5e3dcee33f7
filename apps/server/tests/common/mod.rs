#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use mfdash_market_data::{
    AaumRecord, MarketDataError, MutualFundProvider, RawNavRow, SchemeDetails,
};
use mfdash_server::{api::app_router, build_state_with_provider, config::Config};
use tower::ServiceExt;

/// In-memory provider with two schemes and one AUM quarter.
#[derive(Default)]
pub struct FakeProvider {
    pub unavailable: bool,
}

fn unavailable() -> MarketDataError {
    MarketDataError::ProviderError {
        provider: "FAKE".to_string(),
        message: "HTTP 503 Service Unavailable".to_string(),
    }
}

#[async_trait]
impl MutualFundProvider for FakeProvider {
    fn id(&self) -> &'static str {
        "FAKE"
    }

    async fn get_scheme_codes(&self) -> Result<BTreeMap<String, String>, MarketDataError> {
        let mut codes = BTreeMap::new();
        codes.insert(
            "119598".to_string(),
            "SBI Bluechip Fund - Direct Plan - Growth".to_string(),
        );
        codes.insert("100001".to_string(), "Closed Scheme".to_string());
        Ok(codes)
    }

    async fn get_scheme_details(
        &self,
        code: &str,
    ) -> Result<Option<SchemeDetails>, MarketDataError> {
        if self.unavailable {
            return Err(unavailable());
        }
        Ok((code == "119598").then(|| SchemeDetails {
            fund_house: "SBI Mutual Fund".to_string(),
            scheme_type: "Open Ended Schemes".to_string(),
            scheme_category: "Equity Scheme - Large Cap Fund".to_string(),
            scheme_code: "119598".to_string(),
            scheme_name: "SBI Bluechip Fund - Direct Plan - Growth".to_string(),
            scheme_start_date: None,
        }))
    }

    async fn get_historical_nav(&self, code: &str) -> Result<Vec<RawNavRow>, MarketDataError> {
        if self.unavailable {
            return Err(unavailable());
        }
        if code != "119598" {
            return Ok(Vec::new());
        }
        Ok(RawNavRow::with_day_changes(vec![
            RawNavRow::new("04-01-2024", "103"),
            RawNavRow::new("03-01-2024", "101"),
            RawNavRow::new("02-01-2024", "102"),
            RawNavRow::new("01-01-2024", "100"),
        ]))
    }

    async fn get_average_aum(&self, period: &str) -> Result<Vec<AaumRecord>, MarketDataError> {
        if self.unavailable {
            return Err(unavailable());
        }
        if period != "July - September 2024" {
            return Ok(Vec::new());
        }
        Ok(vec![AaumRecord {
            fund_name: "SBI Mutual Fund".to_string(),
            aaum_domestic: "1,000.00".to_string(),
            aaum_overseas: "25.00".to_string(),
        }])
    }
}

pub async fn test_router(provider: FakeProvider) -> Router {
    let config = Config::default();
    let state = build_state_with_provider(&config, Arc::new(provider))
        .await
        .unwrap();
    app_router(state, &config)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}
