//! Mutual Fund Market Data Crate
//!
//! This crate provides provider-agnostic access to Indian mutual-fund data
//! for the dashboard: the scheme list, scheme metadata, historical NAV
//! series and quarterly average assets under management (AAUM).
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +----------------------+
//! |   Dashboard      | --> |  MutualFundProvider  |  (trait seam)
//! +------------------+     +----------------------+
//!                                     |
//!                                     v
//!                          +----------------------+
//!                          |    AmfiProvider      |  (AMFI + mfapi.in)
//!                          +----------------------+
//!                                     |
//!                                     v
//!                  SchemeDetails / RawNavRow / AaumRecord
//! ```
//!
//! Results that are merely empty (unknown AMC, delisted scheme, unsupported
//! quarter) come back as empty collections. Only transport and payload
//! failures are reported through [`MarketDataError`].
//!
//! # Core Types
//!
//! - [`SchemeCode`] - AMFI scheme code
//! - [`SchemeDetails`] - Scheme metadata (fund house, category, inception)
//! - [`RawNavRow`] - One provider NAV row, most-recent-first
//! - [`AaumRecord`] - One fund's domestic/overseas AAUM figures

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;

pub use models::{AaumRecord, RawNavRow, SchemeCode, SchemeDetails, SchemeName, SchemeStartDate};

pub use provider::amfi::{AmfiEndpoints, AmfiProvider};
pub use provider::MutualFundProvider;
