//! qBittorrent Web API backend.
//!
//! Every torrent operation is executed against a qBittorrent instance through
//! its legacy Web API (`/login`, `/query/*`, `/command/*`). This module holds
//! the records returned by that API, the `TorrentBackend` trait the RPC layer
//! is written against, and `BackendClient`, the `reqwest` implementation.
//!
//! # Endpoints
//!
//! - `GET /query/torrents` - Torrent listing
//! - `GET /query/propertiesGeneral/{hash}` - General properties
//! - `GET /query/propertiesTrackers/{hash}` - Tracker list
//! - `GET /query/propertiesFiles/{hash}` - File list
//! - `GET /query/preferences`, `GET /query/transferInfo`, `GET /version/qbittorrent`
//! - `POST /command/{pause,resume,recheck,delete,deletePerm,setFilePrio,download}` - Form encoded
//! - `POST /command/upload` - Multipart upload of `.torrent` files
//!
//! # Connections
//!
//! The client keeps no idle connections around: each call opens its own
//! short-lived connection. The session cookie obtained by `login` is kept in
//! the client's cookie store.

/// Error types for backend calls.
pub mod errors;

/// Backend records and the HTTP client.
pub mod structs;

/// Implementation blocks for the HTTP client.
pub mod impls;

/// Backend trait definitions.
pub mod traits;
