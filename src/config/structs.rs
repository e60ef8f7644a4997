//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Transmission RPC server configuration.
pub mod rpc_server_config;

/// qBittorrent backend connection configuration.
pub mod backend_config;

/// Polling budget for `torrent-add` reconciliation.
pub mod torrent_add_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
