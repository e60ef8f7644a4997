//! Common data structures.

/// Simple message-carrying error used during start-up.
pub mod custom_error;
