//! Decoded request arguments and call outcomes.

/// The `ids` argument.
pub mod ids_argument;

/// One entry of an `ids` array.
pub mod id_entry;

/// Boolean arguments clients send as `true`/`false` or `0`/`1`.
pub mod flag_argument;

/// Where a `torrent-add` call takes its torrent from.
pub mod add_source;

/// Final state of a `torrent-add` call.
pub mod add_outcome;

/// Per-torrent commands sharing one handler.
pub mod torrent_action;
