//! Implementation blocks for the HTTP client.

/// Construction, request helpers and the `TorrentBackend` implementation.
pub mod backend_client;
