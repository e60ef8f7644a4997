//! Implementation blocks for RPC types.

/// `ids` decoding and resolution.
pub mod ids_argument;

/// Truthiness of flag arguments.
pub mod flag_argument;

/// Picking the `torrent-add` source.
pub mod add_source;

/// Envelope constructors.
pub mod rpc_response;

/// Basic authentication against the backend.
pub mod auth_state;

pub mod pending_add;

/// Submission and polling.
pub mod add_reconciler;
