//! Implementation blocks for common types.

/// Constructor and `Display` for `CustomError`.
pub mod custom_error;
