//! # Rollcall Service
//!
//! Business logic service layer for Rollcall.
//! Validates user input and orchestrates repository calls.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::UserServiceImpl;
pub use user_service::*;
