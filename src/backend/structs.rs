//! Backend records and the HTTP client.

/// `reqwest` based Web API client.
pub mod backend_client;

/// One entry of `/query/torrents`.
pub mod torrent_list_item;

/// `/query/propertiesGeneral/{hash}`.
pub mod properties_general;

/// One entry of `/query/propertiesTrackers/{hash}`.
pub mod properties_tracker;

/// One entry of `/query/propertiesFiles/{hash}`.
pub mod properties_file;

/// `/query/preferences` (subset).
pub mod preferences;

/// `/query/transferInfo`.
pub mod transfer_info;
