//! Custom Axum extractors.

mod payload;

pub use payload::*;
