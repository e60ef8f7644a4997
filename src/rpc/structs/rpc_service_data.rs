use std::sync::Arc;
use crate::backend::traits::torrent_backend::TorrentBackend;
use crate::config::structs::torrent_add_config::TorrentAddConfig;
use crate::registry::structs::identity_registry::IdentityRegistry;
use crate::rpc::structs::auth_state::AuthState;

/// Shared application data available to all RPC request handlers.
///
/// Injected into actix-web's application data once and shared by every
/// worker. The registry is the only mutable part and guards itself.
#[derive(Debug)]
pub struct RpcServiceData {
    pub backend: Arc<dyn TorrentBackend>,
    pub registry: Arc<IdentityRegistry>,
    pub auth: AuthState,
    pub torrent_add: TorrentAddConfig,
}
