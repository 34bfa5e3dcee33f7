use mfdash_core::views::ViewSummary;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ViewInfo {
    pub id: String,
    pub title: String,
}

impl From<ViewSummary> for ViewInfo {
    fn from(summary: ViewSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            title: summary.title.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDefaults {
    pub default_amc: String,
    pub default_aum_period: String,
    pub risk_free_rate: f64,
}

/// A scheme picked by directory label or by scheme code.
#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct SchemeQuery {
    pub scheme: String,
}

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct AmcQuery {
    /// Substring of the AMC name; defaults to the configured AMC
    pub amc: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug)]
#[into_params(parameter_in = Query)]
pub struct PeriodQuery {
    /// Quarter such as "July - September 2024"
    pub period: Option<String>,
}
