use serde::{Deserialize, Serialize};

/// The seven dashboard views, in sidebar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardView {
    AvailableSchemes,
    SchemeDetails,
    HistoricalNav,
    CompareNav,
    Aum,
    PerformanceHeatmap,
    RiskAnalysis,
}

impl DashboardView {
    pub const ALL: [DashboardView; 7] = [
        DashboardView::AvailableSchemes,
        DashboardView::SchemeDetails,
        DashboardView::HistoricalNav,
        DashboardView::CompareNav,
        DashboardView::Aum,
        DashboardView::PerformanceHeatmap,
        DashboardView::RiskAnalysis,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DashboardView::AvailableSchemes => "available-schemes",
            DashboardView::SchemeDetails => "scheme-details",
            DashboardView::HistoricalNav => "historical-nav",
            DashboardView::CompareNav => "compare-nav",
            DashboardView::Aum => "aum",
            DashboardView::PerformanceHeatmap => "performance-heatmap",
            DashboardView::RiskAnalysis => "risk-analysis",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardView::AvailableSchemes => "View Available Schemes",
            DashboardView::SchemeDetails => "Scheme Details",
            DashboardView::HistoricalNav => "Historical NAV",
            DashboardView::CompareNav => "Compare NAV",
            DashboardView::Aum => "AUM",
            DashboardView::PerformanceHeatmap => "Performance Heatmap",
            DashboardView::RiskAnalysis => "Risk and Volatility Analysis",
        }
    }

    pub fn summary(&self) -> ViewSummary {
        ViewSummary {
            id: self.id(),
            title: self.title(),
        }
    }
}

/// Sidebar entry for one view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ViewSummary {
    pub id: &'static str,
    pub title: &'static str,
}

/// A view selection together with its inputs.
///
/// Serialized as `{"view": "<id>", ...inputs}`. Scheme inputs accept either
/// a directory label or a scheme code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum ViewRequest {
    AvailableSchemes {
        #[serde(default)]
        amc: Option<String>,
    },
    SchemeDetails {
        scheme: String,
    },
    HistoricalNav {
        scheme: String,
    },
    CompareNav {
        #[serde(default)]
        schemes: Vec<String>,
    },
    Aum {
        #[serde(default)]
        period: Option<String>,
    },
    PerformanceHeatmap {
        scheme: String,
    },
    RiskAnalysis {
        scheme: String,
    },
}

impl ViewRequest {
    pub fn view(&self) -> DashboardView {
        match self {
            ViewRequest::AvailableSchemes { .. } => DashboardView::AvailableSchemes,
            ViewRequest::SchemeDetails { .. } => DashboardView::SchemeDetails,
            ViewRequest::HistoricalNav { .. } => DashboardView::HistoricalNav,
            ViewRequest::CompareNav { .. } => DashboardView::CompareNav,
            ViewRequest::Aum { .. } => DashboardView::Aum,
            ViewRequest::PerformanceHeatmap { .. } => DashboardView::PerformanceHeatmap,
            ViewRequest::RiskAnalysis { .. } => DashboardView::RiskAnalysis,
        }
    }
}
