//! # Transmission RPC gateway for qBittorrent
//!
//! Lets Transmission remote-control clients (GUIs, `transmission-remote`,
//! web front ends) manage a qBittorrent instance they were never written for.
//!
//! ## Overview
//!
//! The gateway serves the Transmission RPC protocol over HTTP and executes
//! every call against qBittorrent's legacy Web API. Transmission addresses
//! torrents by small integers while qBittorrent only knows info hashes, so the
//! gateway keeps an in-memory registry pairing the two, rebuilt from the
//! backend listing after every restart.
//!
//! ## Request flow
//!
//! 1. [`rpc`] authenticates the request (only when the backend requires a login)
//!    and dispatches on the method name.
//! 2. [`registry`] resolves the `ids` argument to info hashes.
//! 3. [`backend`] fetches or mutates state on the qBittorrent side.
//! 4. [`translator`] shapes the backend records into Transmission objects.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use transmission_qbt_gateway::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false, "config.toml")?;
//! ```
//!
//! ## Modules
//!
//! - [`backend`] - qBittorrent Web API client and records
//! - [`common`] - Shared helpers, query parsing and logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`metainfo`] - `.torrent` and magnet link decoding
//! - [`registry`] - Info hash ⇄ integer ID table
//! - [`rpc`] - Transmission RPC server and method handlers
//! - [`structs`] - CLI argument parsing
//! - [`translator`] - Backend → Transmission field translation

/// qBittorrent Web API backend.
///
/// Holds the `TorrentBackend` trait the RPC layer is written against and the
/// `reqwest` client implementing it.
pub mod backend;

/// Common utilities and shared functionality.
///
/// Contains query string parsing, logging setup and the start-up error type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing and validating the TOML configuration and
/// applying command line overrides.
pub mod config;

/// Torrent metainfo and magnet link decoding.
pub mod metainfo;

/// Identity registry pairing info hashes with Transmission IDs.
pub mod registry;

/// Transmission RPC server.
///
/// Authentication, method dispatch, the reply envelope and one handler per
/// supported method.
pub mod rpc;

/// CLI argument parsing.
pub mod structs;

/// Translation of backend records into Transmission objects.
pub mod translator;
