//! Implementation blocks for configuration types.

/// Loading, saving, defaults and validation of `Configuration`.
pub mod configuration;

/// `Display` and `Error` for `ConfigurationError`.
pub mod configuration_error;

/// Defaults and helpers for `TorrentAddConfig`.
pub mod torrent_add_config;

/// Defaults for `SentryConfig`.
pub mod sentry_config;
