//! Mutual fund provider abstractions and implementations.
//!
//! This module contains:
//! - The `MutualFundProvider` trait that all providers implement
//! - The AMFI provider (AMFI portal for scheme lists and AAUM, mfapi.in for
//!   NAV history and scheme metadata)

mod traits;

pub mod amfi;

pub use traits::MutualFundProvider;
