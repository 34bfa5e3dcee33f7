//! Mutual fund provider trait definition.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{AaumRecord, RawNavRow, SchemeCode, SchemeDetails, SchemeName};

/// Trait for mutual fund data providers.
///
/// Every operation performs a fresh upstream call; nothing is cached.
/// "Nothing found" is an empty result, never an error.
///
/// # Example
///
/// ```ignore
/// use mfdash_market_data::{AmfiProvider, MutualFundProvider};
///
/// let provider = AmfiProvider::new();
/// let schemes = provider.list_schemes("SBI").await?;
/// for (code, name) in &schemes {
///     println!("{code}: {name}");
/// }
/// ```
#[async_trait]
pub trait MutualFundProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch every known scheme as `code -> name`.
    async fn get_scheme_codes(&self) -> Result<BTreeMap<SchemeCode, SchemeName>, MarketDataError>;

    /// Schemes whose name contains `amc`, case-insensitively.
    ///
    /// A blank `amc` matches nothing.
    async fn list_schemes(
        &self,
        amc: &str,
    ) -> Result<BTreeMap<SchemeCode, SchemeName>, MarketDataError> {
        let needle = amc.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(BTreeMap::new());
        }
        let schemes = self.get_scheme_codes().await?;
        Ok(schemes
            .into_iter()
            .filter(|(_, name)| name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Scheme metadata, or `None` for an unknown code.
    async fn get_scheme_details(
        &self,
        code: &str,
    ) -> Result<Option<SchemeDetails>, MarketDataError>;

    /// Historical NAV rows, most-recent-first. Empty for an invalid or
    /// delisted code.
    async fn get_historical_nav(&self, code: &str) -> Result<Vec<RawNavRow>, MarketDataError>;

    /// Average AUM per fund house for a quarter such as
    /// `"July - September 2024"`. Empty for an unsupported period.
    async fn get_average_aum(&self, period: &str) -> Result<Vec<AaumRecord>, MarketDataError>;
}
