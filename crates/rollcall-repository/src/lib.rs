//! # Rollcall Repository
//!
//! Data access for Rollcall.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>        (domain interface)
//! SqliteUserRepository                (SQLx implementation)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! SQLite
//! ```

pub mod pool;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use sqlite::*;
pub use traits::*;
