//! Envelopes, shared service data and the add reconciler.

/// Inbound `{method, arguments, tag}` envelope.
pub mod rpc_request;

/// Outbound `{result, arguments, tag}` envelope.
pub mod rpc_response;

/// State shared by every request handler.
pub mod rpc_service_data;

/// Backend login state and cached credentials.
pub mod auth_state;

/// `id`/`name`/`hashString` triple returned by `torrent-add`.
pub mod added_torrent;

/// Transient state of a torrent waiting to be indexed.
pub mod pending_add;

/// Submit-and-poll flow behind `torrent-add`.
pub mod add_reconciler;
