//! Parsing implementations.

/// Bencode decoding and info hash derivation.
pub mod metainfo;

/// Magnet URI parsing.
pub mod magnet_link;
