//! Schemes module - the immutable scheme lookup shared by every view.

mod schemes_model;

pub use schemes_model::{SchemeDirectory, SchemeEntry};
