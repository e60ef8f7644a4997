//! Implementation blocks for the translator.

/// Backend state → status codes.
pub mod status_mapping;

/// Status and error code conversions.
pub mod torrent_status;

/// Building the full torrent object.
pub mod torrent_view;

/// Field projection.
pub mod translation_request;
