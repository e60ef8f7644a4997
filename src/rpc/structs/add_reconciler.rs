use crate::backend::traits::torrent_backend::TorrentBackend;
use crate::config::structs::torrent_add_config::TorrentAddConfig;
use crate::registry::structs::identity_registry::IdentityRegistry;

/// Submits a torrent to the backend and waits until the registry assigns it an ID.
#[derive(Debug)]
pub struct AddReconciler<'a> {
    pub(crate) backend: &'a dyn TorrentBackend,
    pub(crate) registry: &'a IdentityRegistry,
    pub(crate) config: TorrentAddConfig,
}
