//! Transmission RPC front end.
//!
//! Serves the Transmission remote-control protocol on `POST /transmission/rpc`
//! and `POST /rpc`. Every request carries a JSON envelope
//! `{"method", "arguments", "tag"}` and receives `{"result", "arguments", "tag"}`
//! back with HTTP 200, whatever the outcome of the call. The only other status
//! is 401 when the backend requires a login and the request brings no valid
//! Basic credentials.
//!
//! # Methods
//!
//! - `session-get`, `session-stats`, `free-space`
//! - `torrent-get`
//! - `torrent-stop`, `torrent-start`, `torrent-start-now`, `torrent-verify`
//! - `torrent-remove`
//! - `torrent-add`
//! - `torrent-set` (`files-wanted` / `files-unwanted` only)
//!
//! Anything else is answered with `"method name not recognized"`.

/// Error types for RPC calls.
pub mod errors;

/// Decoded request arguments and call outcomes.
pub mod enums;

/// Envelopes, shared service data and the add reconciler.
pub mod structs;

/// Implementation blocks for RPC types.
pub mod impls;

/// `session-get`, `session-stats` and `free-space`.
pub mod rpc_session;

/// `torrent-get`, the start/stop/verify actions, `torrent-remove` and `torrent-set`.
pub mod rpc_torrents;

/// `torrent-add`.
pub mod rpc_torrent_add;

/// Server setup, authentication and method dispatch.
#[allow(clippy::module_inception)]
pub mod rpc;
