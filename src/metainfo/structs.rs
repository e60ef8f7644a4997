//! Parsed torrent sources.

/// Decoded `.torrent` file.
pub mod metainfo;

/// Parsed `magnet:?` URI.
pub mod magnet_link;
