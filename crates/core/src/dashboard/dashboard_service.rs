use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};
use mfdash_market_data::MutualFundProvider;
use serde_json::{json, Value};

use super::dashboard_model::DashboardSettings;
use super::dashboard_traits::DashboardServiceTrait;
use crate::constants::{NO_DATA_AVAILABLE, NO_SCHEMES_FOUND, SELECT_AT_LEAST_ONE_SCHEME};
use crate::errors::{Error, Result};
use crate::nav::{clean_dropping_missing, clean_interpolating_gaps};
use crate::risk::{compute_risk_report, RiskError};
use crate::schemes::{SchemeDirectory, SchemeEntry};
use crate::views::{
    aum_table, aum_totals, heatmap_figure, monthly_mean_day_change, risk_metrics, risk_scatter,
    ComparisonFrame, DashboardView, DetailField, Panel, ViewRequest, ViewSummary,
};

const COMPARISON_TITLE: &str = "Comparison of NAVs";
const HEATMAP_TITLE: &str = "NAV Performance Heatmap";

/// Renders dashboard views from a provider and a prebuilt scheme directory.
pub struct DashboardService {
    provider: Arc<dyn MutualFundProvider>,
    directory: Arc<SchemeDirectory>,
    settings: DashboardSettings,
}

impl DashboardService {
    pub fn new(
        provider: Arc<dyn MutualFundProvider>,
        directory: Arc<SchemeDirectory>,
        settings: DashboardSettings,
    ) -> Self {
        Self {
            provider,
            directory,
            settings,
        }
    }

    /// Fetch the scheme list once and build the service around it.
    pub async fn load(
        provider: Arc<dyn MutualFundProvider>,
        settings: DashboardSettings,
    ) -> Result<Self> {
        let codes = provider.get_scheme_codes().await?;
        let directory = SchemeDirectory::from_codes(codes);
        info!(
            "Loaded {} schemes from provider {}",
            directory.len(),
            provider.id()
        );
        Ok(Self::new(provider, Arc::new(directory), settings))
    }

    pub fn directory(&self) -> &SchemeDirectory {
        &self.directory
    }

    fn resolve(&self, scheme: &str) -> Result<&SchemeEntry> {
        if scheme.trim().is_empty() {
            return Err(Error::Validation("a scheme must be selected".to_string()));
        }
        self.directory
            .resolve(scheme)
            .ok_or_else(|| Error::UnknownScheme(scheme.trim().to_string()))
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    fn views(&self) -> Vec<ViewSummary> {
        DashboardView::ALL.iter().map(|v| v.summary()).collect()
    }

    fn scheme_labels(&self) -> Vec<String> {
        self.directory.labels().map(str::to_string).collect()
    }

    fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    async fn render(&self, request: ViewRequest) -> Result<Panel> {
        debug!("Rendering view {}", request.view().id());
        match request {
            ViewRequest::AvailableSchemes { amc } => {
                let amc = amc.unwrap_or_else(|| self.settings.default_amc.clone());
                self.available_schemes(&amc).await
            }
            ViewRequest::SchemeDetails { scheme } => self.scheme_details(&scheme).await,
            ViewRequest::HistoricalNav { scheme } => self.historical_nav(&scheme).await,
            ViewRequest::CompareNav { schemes } => self.compare_nav(&schemes).await,
            ViewRequest::Aum { period } => {
                let period = period.unwrap_or_else(|| self.settings.default_aum_period.clone());
                self.average_aum(&period).await
            }
            ViewRequest::PerformanceHeatmap { scheme } => self.performance_heatmap(&scheme).await,
            ViewRequest::RiskAnalysis { scheme } => self.risk_analysis(&scheme).await,
        }
    }

    async fn available_schemes(&self, amc: &str) -> Result<Panel> {
        let schemes = self.provider.list_schemes(amc).await?;
        if schemes.is_empty() {
            return Ok(Panel::no_data(NO_SCHEMES_FOUND));
        }

        Ok(Panel::Table {
            title: DashboardView::AvailableSchemes.title().to_string(),
            columns: vec!["Scheme Code".to_string(), "Scheme Name".to_string()],
            rows: schemes
                .into_iter()
                .map(|(code, name)| vec![Value::String(code), Value::String(name)])
                .collect(),
        })
    }

    async fn scheme_details(&self, scheme: &str) -> Result<Panel> {
        let entry = self.resolve(scheme)?;
        let Some(details) = self.provider.get_scheme_details(&entry.code).await? else {
            return Ok(Panel::no_data(NO_DATA_AVAILABLE));
        };

        Ok(Panel::Details {
            title: details.scheme_name.clone(),
            fields: details
                .fields()
                .into_iter()
                .map(|(label, value)| DetailField {
                    label: label.to_string(),
                    value,
                })
                .collect(),
        })
    }

    async fn historical_nav(&self, scheme: &str) -> Result<Panel> {
        let entry = self.resolve(scheme)?;
        let rows = self.provider.get_historical_nav(&entry.code).await?;
        if rows.is_empty() {
            return Ok(Panel::no_data(NO_DATA_AVAILABLE));
        }

        Ok(Panel::Table {
            title: entry.label.clone(),
            columns: vec!["date".to_string(), "nav".to_string(), "dayChange".to_string()],
            rows: rows
                .into_iter()
                .map(|row| vec![json!(row.date), json!(row.nav), json!(row.day_change)])
                .collect(),
        })
    }

    async fn compare_nav(&self, schemes: &[String]) -> Result<Panel> {
        let selected: Vec<&String> = schemes.iter().filter(|s| !s.trim().is_empty()).collect();
        if selected.is_empty() {
            return Ok(Panel::no_data(SELECT_AT_LEAST_ONE_SCHEME));
        }

        let mut series = Vec::with_capacity(selected.len());
        for scheme in selected {
            let entry = self.resolve(scheme)?;
            let rows = self.provider.get_historical_nav(&entry.code).await?;
            let cleaned = clean_interpolating_gaps(&rows);
            if cleaned.is_empty() {
                warn!("No usable NAV history for scheme {}", entry.code);
            }
            series.push((entry.label.clone(), cleaned));
        }

        let frame = ComparisonFrame::from_series(series);
        if frame.is_empty() {
            return Ok(Panel::no_data(NO_DATA_AVAILABLE));
        }

        Ok(Panel::Chart {
            title: COMPARISON_TITLE.to_string(),
            figure: frame.to_figure(COMPARISON_TITLE),
        })
    }

    async fn average_aum(&self, period: &str) -> Result<Panel> {
        let records = self.provider.get_average_aum(period).await?;
        if records.is_empty() {
            return Ok(Panel::no_data(NO_DATA_AVAILABLE));
        }

        let totals = aum_totals(&records);
        Ok(aum_table(&format!("AUM ({})", period.trim()), &totals))
    }

    async fn performance_heatmap(&self, scheme: &str) -> Result<Panel> {
        let entry = self.resolve(scheme)?;
        let rows = self.provider.get_historical_nav(&entry.code).await?;
        let months = monthly_mean_day_change(&rows);
        if months.is_empty() {
            return Ok(Panel::no_data(NO_DATA_AVAILABLE));
        }

        Ok(Panel::Chart {
            title: HEATMAP_TITLE.to_string(),
            figure: heatmap_figure(HEATMAP_TITLE, &months),
        })
    }

    async fn risk_analysis(&self, scheme: &str) -> Result<Panel> {
        let entry = self.resolve(scheme)?;
        let rows = self.provider.get_historical_nav(&entry.code).await?;
        let series = clean_dropping_missing(&rows);

        let report = match compute_risk_report(&series, self.settings.risk_free_rate) {
            Ok(report) => report,
            Err(RiskError::InsufficientData { actual, .. }) => {
                debug!(
                    "Skipping risk metrics for {}: {} usable NAV records",
                    entry.code, actual
                );
                return Ok(Panel::no_data(NO_DATA_AVAILABLE));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Panel::Metrics {
            title: format!("Metrics for {}", entry.label),
            metrics: risk_metrics(&report),
            chart: Some(risk_scatter(&entry.label, &report)),
        })
    }
}
