//! Dashboard views: the view selector, the panels they render and the
//! tabular reshaping behind each chart.

mod aum;
mod comparison;
mod heatmap;
mod panel;
mod risk_view;
mod views_model;

pub use aum::{aum_table, aum_totals, parse_aum_figure, AumTotal};
pub use comparison::ComparisonFrame;
pub use heatmap::{heatmap_figure, monthly_mean_day_change, MonthlyChange};
pub use panel::{DetailField, Figure, MetricItem, Panel};
pub use risk_view::{risk_metrics, risk_scatter};
pub use views_model::{DashboardView, ViewRequest, ViewSummary};
