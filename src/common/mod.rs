//! Common utilities and shared functionality.
//!
//! Helpers used across the gateway that do not belong to a single subsystem.
//!
//! # Utilities
//!
//! - Logging setup (`fern` dispatcher with colored levels)
//! - Query string parsing (magnet links, form bodies)
//!
//! # Data Structures
//!
//! - `CustomError` - Start-up error type

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

#[cfg(test)]
mod tests;
