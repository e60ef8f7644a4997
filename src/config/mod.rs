//! Configuration management module.
//!
//! Loads, validates and saves the gateway configuration (`config.toml`).
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **rpc_server**: Transmission RPC listener (address, workers, timeouts)
//! - **backend**: qBittorrent Web API address and request timeout
//! - **torrent_add**: polling budget used while waiting for a new torrent to be indexed
//! - **sentry_config**: Error reporting configuration
//!
//! Command line flags (`--verbose`, `--api-addr`, `--port`) are applied on top
//! of the loaded file.
//!
//! # Example
//!
//! ```rust,ignore
//! use transmission_qbt_gateway::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false, "config.toml")?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
