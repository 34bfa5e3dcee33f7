//! Dashboard module - one handler per view.

mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;


pub use dashboard_model::DashboardSettings;
pub use dashboard_service::DashboardService;
pub use dashboard_traits::DashboardServiceTrait;
