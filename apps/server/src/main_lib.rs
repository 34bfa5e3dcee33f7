use std::sync::Arc;

use crate::config::{Config, LogFormat};
use mfdash_core::{dashboard::DashboardSettings, DashboardService, DashboardServiceTrait};
use mfdash_market_data::{AmfiProvider, MutualFundProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub dashboard: Arc<dyn DashboardServiceTrait>,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

/// Build shared state against the AMFI endpoints in `config`.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider: Arc<dyn MutualFundProvider> =
        Arc::new(AmfiProvider::with_endpoints(config.endpoints.clone()));
    tracing::info!(
        "Using AMFI scheme list at {}",
        config.endpoints.nav_all_url
    );
    build_state_with_provider(config, provider).await
}

/// Build shared state around any provider. The scheme directory is fetched
/// once here; a failing upstream aborts startup.
pub async fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn MutualFundProvider>,
) -> anyhow::Result<Arc<AppState>> {
    let settings = DashboardSettings {
        default_amc: config.default_amc.clone(),
        default_aum_period: config.default_aum_period.clone(),
        risk_free_rate: config.risk_free_rate,
    };

    let dashboard = DashboardService::load(provider, settings).await?;
    tracing::info!("Scheme directory ready with {} schemes", dashboard.directory().len());

    Ok(Arc::new(AppState {
        dashboard: Arc::new(dashboard),
    }))
}
