//! Translation inputs and outputs.

/// Status, error and stalled flag derived from a backend state string.
pub mod status_mapping;

/// Every backend record describing one torrent.
pub mod torrent_view;

/// Field projection and resolved IDs of a `torrent-get` call.
pub mod translation_request;
