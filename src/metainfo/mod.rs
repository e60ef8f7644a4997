//! Torrent sources accepted by `torrent-add`.
//!
//! - [`structs::metainfo::Metainfo`] decodes a bencoded `.torrent` file and
//!   derives its info hash (SHA-1 of the raw `info` dictionary).
//! - [`structs::magnet_link::MagnetLink`] extracts the info hash and display
//!   name from a `magnet:?` URI.
//!
//! Info hashes are always produced as 40 lower-case hex characters, the form
//! the backend reports in its listings.

/// Error types for metainfo and magnet parsing.
pub mod errors;

/// Parsed torrent sources.
pub mod structs;

/// Parsing implementations.
pub mod impls;

#[cfg(test)]
mod tests;
