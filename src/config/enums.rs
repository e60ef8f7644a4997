//! Configuration enumerations.

/// Errors raised while reading, parsing or validating the configuration.
pub mod configuration_error;
