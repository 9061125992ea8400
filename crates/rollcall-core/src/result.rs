//! Result type aliases for Rollcall.

use crate::RollcallError;

/// A specialized `Result` type for Rollcall operations.
pub type RollcallResult<T> = Result<T, RollcallError>;
