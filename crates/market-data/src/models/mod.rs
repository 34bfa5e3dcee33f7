//! Market data models
//!
//! This module contains the data types returned by mutual-fund providers:
//! - `types` - Type aliases for scheme identifiers (SchemeCode, SchemeName)
//! - `scheme` - Scheme metadata (SchemeDetails, SchemeStartDate)
//! - `nav` - Historical NAV rows as the provider publishes them (RawNavRow)
//! - `aum` - Quarterly average AUM figures (AaumRecord)

mod aum;
mod nav;
mod scheme;
mod types;

pub use aum::AaumRecord;
pub use nav::RawNavRow;
pub use scheme::{SchemeDetails, SchemeStartDate};
pub use types::{SchemeCode, SchemeName};
