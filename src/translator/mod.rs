//! Backend → Transmission field translation.
//!
//! A Transmission `torrent-get` reply carries a flat object per torrent with
//! every field the client might ask for. qBittorrent spreads that information
//! over four endpoints. This module joins them back together for one request:
//!
//! - the listing record gives names, speeds, ratio and the state string,
//! - `propertiesGeneral` gives paths, dates, piece accounting and limits,
//! - `propertiesTrackers` gives announce URLs,
//! - `propertiesFiles` gives per-file size, progress and priority.
//!
//! Fields without a backend counterpart keep the values of the baseline
//! templates in [`templates`]. Nothing is cached between requests.

/// Transmission status and error codes.
pub mod enums;

/// Translation inputs and outputs.
pub mod structs;

/// Implementation blocks for the translator.
pub mod impls;

/// Packed piece-completion bitfield.
pub mod pieces;

/// Baseline objects for torrents, trackers and the session.
pub mod templates;
