//! Backend trait definitions.

/// Operations the RPC layer needs from the torrent engine.
pub mod torrent_backend;
