//! Mutual Fund Dashboard Core - Domain models, calculators and view services.
//!
//! This crate holds everything between the data provider and the HTTP
//! surface: the scheme directory, the two NAV cleaning policies, the
//! return and risk calculator, and one handler per dashboard view.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod nav;
pub mod risk;
pub mod schemes;
pub mod views;

// Re-export the types the server layer reaches for most
pub use dashboard::{DashboardService, DashboardServiceTrait};
pub use schemes::SchemeDirectory;
pub use views::{DashboardView, Panel, ViewRequest};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
