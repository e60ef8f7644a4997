use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the qBittorrent Web API, e.g. `http://localhost:8080/`.
    pub address: String,
    /// Per-request timeout in seconds.
    pub request_timeout: u64,
}
