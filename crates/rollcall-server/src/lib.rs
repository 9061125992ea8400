//! # Rollcall Server Library
//!
//! Dependency injection wiring, application assembly and startup
//! utilities for the Rollcall server binary.

pub mod app;
pub mod di;
pub mod startup;

pub use app::{AppBuilder, Application};
