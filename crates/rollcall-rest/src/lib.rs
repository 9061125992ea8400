//! # Rollcall REST
//!
//! REST API layer using Axum for Rollcall.
//! Provides the user resource endpoints, the home banner and health checks.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
