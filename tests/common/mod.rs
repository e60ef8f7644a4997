#![allow(dead_code)]
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bip_bencode::{ben_bytes, ben_int, ben_map};
use parking_lot::Mutex;
use rand::RngExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use transmission_qbt_gateway::backend::errors::BackendError;
use transmission_qbt_gateway::backend::structs::preferences::Preferences;
use transmission_qbt_gateway::backend::structs::properties_file::PropertiesFile;
use transmission_qbt_gateway::backend::structs::properties_general::PropertiesGeneral;
use transmission_qbt_gateway::backend::structs::properties_tracker::PropertiesTracker;
use transmission_qbt_gateway::backend::structs::torrent_list_item::TorrentListItem;
use transmission_qbt_gateway::backend::structs::transfer_info::TransferInfo;
use transmission_qbt_gateway::backend::traits::torrent_backend::TorrentBackend;
use transmission_qbt_gateway::config::structs::configuration::Configuration;
use transmission_qbt_gateway::config::structs::torrent_add_config::TorrentAddConfig;
use transmission_qbt_gateway::metainfo::structs::magnet_link::MagnetLink;
use transmission_qbt_gateway::metainfo::structs::metainfo::Metainfo;
use transmission_qbt_gateway::registry::structs::identity_registry::IdentityRegistry;
use transmission_qbt_gateway::rpc::structs::auth_state::AuthState;
use transmission_qbt_gateway::rpc::structs::rpc_service_data::RpcServiceData;

pub type TestBackend = Arc<FakeBackend>;
pub type TestServiceData = Arc<RpcServiceData>;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "adminadmin";

/// In-memory stand-in for a qBittorrent instance.
#[derive(Debug, Default)]
pub struct FakeBackendState {
    pub torrents: Vec<TorrentListItem>,
    pub general: HashMap<String, PropertiesGeneral>,
    pub trackers: HashMap<String, Vec<PropertiesTracker>>,
    pub files: HashMap<String, Vec<PropertiesFile>>,
    pub save_path: String,
    pub version: String,
    pub transfer: TransferInfo,
    /// Submitted torrents show up in the listing when set.
    pub index_submissions: bool,
    /// Body returned by `fetch`.
    pub fetch_payload: Vec<u8>,
    /// Every mutating call, in order, e.g. `pause:<hash>`.
    pub calls: Vec<String>,
    pub login_attempts: usize,
    /// Accounts accepted by `login` besides the default one.
    pub extra_accounts: Vec<(String, String)>,
    pub fail_listing: bool,
    /// Hashes whose property queries fail, as for a torrent removed mid-request.
    pub vanished: HashSet<String>,
}

#[derive(Debug, Default)]
pub struct FakeBackend {
    pub state: Mutex<FakeBackendState>,
}

impl FakeBackend {
    pub fn new() -> TestBackend {
        let backend = FakeBackend::default();
        {
            let mut state = backend.state.lock();
            state.save_path = String::from("/downloads/");
            state.version = String::from("v3.3.16");
            state.index_submissions = true;
        }
        Arc::new(backend)
    }

    pub fn with_torrents(torrents: Vec<TorrentListItem>) -> TestBackend {
        let backend = FakeBackend::new();
        backend.state.lock().torrents = torrents;
        backend
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    pub fn listed_hashes(&self) -> Vec<String> {
        self.state.lock().torrents.iter().map(|item| item.hash.clone()).collect()
    }

    fn record(&self, call: String) {
        self.state.lock().calls.push(call);
    }

    fn index(&self, hash: String, name: String) {
        let mut state = self.state.lock();
        if state.index_submissions && !state.torrents.iter().any(|item| item.hash == hash) {
            state.torrents.push(torrent(&hash, &name, "pausedDL"));
        }
    }
}

#[async_trait]
impl TorrentBackend for FakeBackend {
    async fn auth_required(&self) -> Result<bool, BackendError> {
        Ok(false)
    }

    async fn login(&self, username: &str, password: &str) -> Result<bool, BackendError> {
        let mut state = self.state.lock();
        state.login_attempts += 1;
        Ok((username == USERNAME && password == PASSWORD)
            || state.extra_accounts.iter().any(|(user, pass)| user == username && pass == password))
    }

    async fn torrent_list(&self) -> Result<Vec<TorrentListItem>, BackendError> {
        let state = self.state.lock();
        if state.fail_listing {
            return Err(BackendError::StatusError { status: 500, path: String::from("/query/torrents") });
        }
        Ok(state.torrents.clone())
    }

    async fn properties_general(&self, hash: &str) -> Result<PropertiesGeneral, BackendError> {
        if self.state.lock().vanished.contains(hash) {
            return Err(BackendError::StatusError { status: 404, path: format!("/query/propertiesGeneral/{hash}") });
        }
        Ok(self.state.lock().general.get(hash).cloned().unwrap_or_default())
    }

    async fn properties_trackers(&self, hash: &str) -> Result<Vec<PropertiesTracker>, BackendError> {
        Ok(self.state.lock().trackers.get(hash).cloned().unwrap_or_default())
    }

    async fn properties_files(&self, hash: &str) -> Result<Vec<PropertiesFile>, BackendError> {
        Ok(self.state.lock().files.get(hash).cloned().unwrap_or_default())
    }

    async fn preferences(&self) -> Result<Preferences, BackendError> {
        Ok(Preferences { save_path: self.state.lock().save_path.clone() })
    }

    async fn version(&self) -> Result<String, BackendError> {
        Ok(self.state.lock().version.clone())
    }

    async fn transfer_info(&self) -> Result<TransferInfo, BackendError> {
        Ok(self.state.lock().transfer.clone())
    }

    async fn pause(&self, hash: &str) -> Result<(), BackendError> {
        self.record(format!("pause:{hash}"));
        Ok(())
    }

    async fn resume(&self, hash: &str) -> Result<(), BackendError> {
        self.record(format!("resume:{hash}"));
        Ok(())
    }

    async fn recheck(&self, hash: &str) -> Result<(), BackendError> {
        self.record(format!("recheck:{hash}"));
        Ok(())
    }

    async fn delete(&self, hashes: &[String], delete_files: bool) -> Result<(), BackendError> {
        let joined = hashes.join("|");
        self.record(if delete_files { format!("deletePerm:{joined}") } else { format!("delete:{joined}") });
        self.state.lock().torrents.retain(|item| !hashes.contains(&item.hash));
        Ok(())
    }

    async fn set_file_priority(&self, hash: &str, file_id: i64, priority: i64) -> Result<(), BackendError> {
        self.record(format!("setFilePrio:{hash}:{file_id}:{priority}"));
        Ok(())
    }

    async fn download(&self, urls: &str, save_path: Option<&str>) -> Result<(), BackendError> {
        self.record(format!("download:{urls}:{}", save_path.unwrap_or("")));
        if let Ok(magnet) = MagnetLink::parse(urls) {
            self.index(magnet.info_hash, magnet.display_name);
        }
        Ok(())
    }

    async fn upload(&self, metainfo: Vec<u8>, save_path: Option<&str>) -> Result<(), BackendError> {
        let decoded = Metainfo::from_bytes(&metainfo)
            .map_err(|error| BackendError::ResponseError(error.to_string()))?;
        self.record(format!("upload:{}:{}", decoded.info_hash, save_path.unwrap_or("")));
        self.index(decoded.info_hash, decoded.name);
        Ok(())
    }

    async fn fetch(&self, url: &str, cookies: Option<&str>) -> Result<Vec<u8>, BackendError> {
        self.record(format!("fetch:{url}:{}", cookies.unwrap_or("")));
        Ok(self.state.lock().fetch_payload.clone())
    }
}

pub fn torrent(hash: &str, name: &str, state: &str) -> TorrentListItem {
    TorrentListItem {
        hash: hash.to_string(),
        name: name.to_string(),
        size: 1000,
        progress: 0.5,
        state: state.to_string(),
        ..Default::default()
    }
}

pub fn random_info_hash() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    hex::encode(bytes)
}

pub fn fast_add_config() -> TorrentAddConfig {
    TorrentAddConfig {
        poll_attempts: 5,
        poll_interval_ms: 1,
    }
}

pub fn create_service_data(backend: TestBackend, auth_required: bool) -> TestServiceData {
    Arc::new(RpcServiceData {
        backend,
        registry: Arc::new(IdentityRegistry::new()),
        auth: AuthState::new(auth_required),
        torrent_add: fast_add_config(),
    })
}

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.rpc_server.bind_address = String::from("127.0.0.1:9091");
    config.torrent_add = fast_add_config();
    config
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Single-file `.torrent` contents named `name`.
pub fn torrent_file(name: &str) -> Vec<u8> {
    ben_map! {
        "announce" => ben_bytes!("http://tracker.example/announce"),
        "info" => ben_map! {
            "length" => ben_int!(4096),
            "name" => ben_bytes!(name),
            "piece length" => ben_int!(16384),
            "pieces" => ben_bytes!(vec![3u8; 20])
        }
    }.encode()
}

pub fn torrent_file_base64(name: &str) -> String {
    STANDARD.encode(torrent_file(name))
}

pub fn magnet(hash: &str, name: &str) -> String {
    format!("magnet:?xt=urn:btih:{hash}&dn={name}")
}

pub fn rpc_body(method: &str, arguments: Value) -> Value {
    json!({
        "method": method,
        "arguments": arguments,
        "tag": 42
    })
}

pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}
