use serde::{Deserialize, Serialize};
use crate::config::structs::backend_config::BackendConfig;
use crate::config::structs::rpc_server_config::RpcServerConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::torrent_add_config::TorrentAddConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub rpc_server: RpcServerConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub torrent_add: TorrentAddConfig,
    #[serde(default)]
    pub sentry_config: SentryConfig,
}
