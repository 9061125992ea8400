//! Domain entities for Rollcall.

pub mod user;

pub use user::*;
