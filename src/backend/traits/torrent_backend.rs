use std::fmt::Debug;
use async_trait::async_trait;
use crate::backend::errors::BackendError;
use crate::backend::structs::preferences::Preferences;
use crate::backend::structs::properties_file::PropertiesFile;
use crate::backend::structs::properties_general::PropertiesGeneral;
use crate::backend::structs::properties_tracker::PropertiesTracker;
use crate::backend::structs::torrent_list_item::TorrentListItem;
use crate::backend::structs::transfer_info::TransferInfo;

/// Operations the RPC layer runs against the torrent engine.
#[async_trait]
pub trait TorrentBackend: Debug + Send + Sync {
    /// Whether the backend refuses unauthenticated queries.
    async fn auth_required(&self) -> Result<bool, BackendError>;

    /// Opens a backend session; `Ok(false)` when the credentials are rejected.
    async fn login(&self, username: &str, password: &str) -> Result<bool, BackendError>;

    async fn torrent_list(&self) -> Result<Vec<TorrentListItem>, BackendError>;

    async fn properties_general(&self, hash: &str) -> Result<PropertiesGeneral, BackendError>;

    async fn properties_trackers(&self, hash: &str) -> Result<Vec<PropertiesTracker>, BackendError>;

    async fn properties_files(&self, hash: &str) -> Result<Vec<PropertiesFile>, BackendError>;

    async fn preferences(&self) -> Result<Preferences, BackendError>;

    async fn version(&self) -> Result<String, BackendError>;

    async fn transfer_info(&self) -> Result<TransferInfo, BackendError>;

    async fn pause(&self, hash: &str) -> Result<(), BackendError>;

    async fn resume(&self, hash: &str) -> Result<(), BackendError>;

    async fn recheck(&self, hash: &str) -> Result<(), BackendError>;

    /// Removes every torrent of `hashes` in one call, with their data when `delete_files` is set.
    async fn delete(&self, hashes: &[String], delete_files: bool) -> Result<(), BackendError>;

    async fn set_file_priority(&self, hash: &str, file_id: i64, priority: i64) -> Result<(), BackendError>;

    /// Submits magnet links or URLs (newline separated) for the backend to fetch.
    async fn download(&self, urls: &str, save_path: Option<&str>) -> Result<(), BackendError>;

    /// Uploads the raw bytes of a `.torrent` file.
    async fn upload(&self, metainfo: Vec<u8>, save_path: Option<&str>) -> Result<(), BackendError>;

    /// Fetches a remote `.torrent` file on behalf of a client.
    async fn fetch(&self, url: &str, cookies: Option<&str>) -> Result<Vec<u8>, BackendError>;
}
