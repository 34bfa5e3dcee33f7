use async_trait::async_trait;

use super::dashboard_model::DashboardSettings;
use crate::errors::Result;
use crate::views::{Panel, ViewRequest, ViewSummary};

/// Trait defining the dashboard's view handlers.
///
/// Scheme arguments accept a directory label or a scheme code. Empty
/// provider answers render as [`Panel::NoData`]; errors are reserved for
/// unknown schemes and upstream failures.
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Views in sidebar order.
    fn views(&self) -> Vec<ViewSummary>;

    /// Every scheme label, for the scheme pickers.
    fn scheme_labels(&self) -> Vec<String>;

    fn settings(&self) -> &DashboardSettings;

    /// Dispatch a tagged request to its handler.
    async fn render(&self, request: ViewRequest) -> Result<Panel>;

    async fn available_schemes(&self, amc: &str) -> Result<Panel>;

    async fn scheme_details(&self, scheme: &str) -> Result<Panel>;

    async fn historical_nav(&self, scheme: &str) -> Result<Panel>;

    async fn compare_nav(&self, schemes: &[String]) -> Result<Panel>;

    async fn average_aum(&self, period: &str) -> Result<Panel>;

    async fn performance_heatmap(&self, scheme: &str) -> Result<Panel>;

    async fn risk_analysis(&self, scheme: &str) -> Result<Panel>;
}
