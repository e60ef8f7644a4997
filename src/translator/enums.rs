//! Transmission status and error codes.

/// `status` values of a Transmission torrent object.
pub mod torrent_status;

/// `error` values of a Transmission torrent object.
pub mod torrent_error;
