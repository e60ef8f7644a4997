use std::time::Duration;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client, Response, StatusCode};
use reqwest::header::COOKIE;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use crate::backend::errors::BackendError;
use crate::backend::structs::backend_client::BackendClient;
use crate::backend::structs::preferences::Preferences;
use crate::backend::structs::properties_file::PropertiesFile;
use crate::backend::structs::properties_general::PropertiesGeneral;
use crate::backend::structs::properties_tracker::PropertiesTracker;
use crate::backend::structs::torrent_list_item::TorrentListItem;
use crate::backend::structs::transfer_info::TransferInfo;
use crate::backend::traits::torrent_backend::TorrentBackend;
use crate::config::structs::backend_config::BackendConfig;

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<BackendClient, BackendError> {
        let client = Client::builder()
            .cookie_store(true)
            .pool_max_idle_per_host(0)
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;
        Ok(BackendClient {
            address: config.address.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn make_request_url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    fn check_status(path: &str, response: Response) -> Result<Response, BackendError> {
        match response.status() {
            StatusCode::FORBIDDEN => Err(BackendError::Forbidden(path.to_string())),
            status if !status.is_success() => Err(BackendError::StatusError {
                status: status.as_u16(),
                path: path.to_string(),
            }),
            _ => Ok(response),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        debug!("[BACKEND] GET {path}");
        let response = self.client.get(self.make_request_url(path)).send().await?;
        let response = Self::check_status(path, response)?;
        Ok(response.json::<T>().await?)
    }

    async fn post_form(&self, path: &str, params: &[(&str, &str)]) -> Result<(), BackendError> {
        debug!("[BACKEND] POST {path} {params:?}");
        let response = self.client.post(self.make_request_url(path)).form(params).send().await?;
        Self::check_status(path, response)?;
        Ok(())
    }
}

#[async_trait]
impl TorrentBackend for BackendClient {
    async fn auth_required(&self) -> Result<bool, BackendError> {
        let path = "/query/torrents";
        let response = self.client.get(self.make_request_url(path)).send().await?;
        match response.status() {
            StatusCode::FORBIDDEN => {
                info!("[BACKEND] Authentication is required");
                Ok(true)
            }
            status if status.is_success() => {
                info!("[BACKEND] Authentication is not required");
                Ok(false)
            }
            status => Err(BackendError::StatusError { status: status.as_u16(), path: path.to_string() }),
        }
    }

    async fn login(&self, username: &str, password: &str) -> Result<bool, BackendError> {
        let path = "/login";
        let response = self.client.post(self.make_request_url(path))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;
        if !response.status().is_success() {
            debug!("[BACKEND] Login for {username} rejected with HTTP {}", response.status());
            return Ok(false);
        }
        let body = response.text().await?;
        let accepted = body.trim().eq_ignore_ascii_case("ok.");
        debug!("[BACKEND] Login for {username}: {}", if accepted { "accepted" } else { "rejected" });
        Ok(accepted)
    }

    async fn torrent_list(&self) -> Result<Vec<TorrentListItem>, BackendError> {
        self.get_json("/query/torrents").await
    }

    async fn properties_general(&self, hash: &str) -> Result<PropertiesGeneral, BackendError> {
        self.get_json(&format!("/query/propertiesGeneral/{hash}")).await
    }

    async fn properties_trackers(&self, hash: &str) -> Result<Vec<PropertiesTracker>, BackendError> {
        self.get_json(&format!("/query/propertiesTrackers/{hash}")).await
    }

    async fn properties_files(&self, hash: &str) -> Result<Vec<PropertiesFile>, BackendError> {
        self.get_json(&format!("/query/propertiesFiles/{hash}")).await
    }

    async fn preferences(&self) -> Result<Preferences, BackendError> {
        self.get_json("/query/preferences").await
    }

    async fn version(&self) -> Result<String, BackendError> {
        let path = "/version/qbittorrent";
        let response = self.client.get(self.make_request_url(path)).send().await?;
        let response = Self::check_status(path, response)?;
        Ok(response.text().await?.trim().to_string())
    }

    async fn transfer_info(&self) -> Result<TransferInfo, BackendError> {
        self.get_json("/query/transferInfo").await
    }

    async fn pause(&self, hash: &str) -> Result<(), BackendError> {
        self.post_form("/command/pause", &[("hash", hash)]).await
    }

    async fn resume(&self, hash: &str) -> Result<(), BackendError> {
        self.post_form("/command/resume", &[("hash", hash)]).await
    }

    async fn recheck(&self, hash: &str) -> Result<(), BackendError> {
        self.post_form("/command/recheck", &[("hash", hash)]).await
    }

    async fn delete(&self, hashes: &[String], delete_files: bool) -> Result<(), BackendError> {
        let joined_hashes = hashes.join("|");
        let path = if delete_files { "/command/deletePerm" } else { "/command/delete" };
        self.post_form(path, &[("hashes", joined_hashes.as_str())]).await
    }

    async fn set_file_priority(&self, hash: &str, file_id: i64, priority: i64) -> Result<(), BackendError> {
        let file_id = file_id.to_string();
        let priority = priority.to_string();
        self.post_form("/command/setFilePrio", &[
            ("hash", hash),
            ("id", file_id.as_str()),
            ("priority", priority.as_str()),
        ]).await
    }

    async fn download(&self, urls: &str, save_path: Option<&str>) -> Result<(), BackendError> {
        match save_path {
            Some(save_path) => self.post_form("/command/download", &[("urls", urls), ("savepath", save_path)]).await,
            None => self.post_form("/command/download", &[("urls", urls)]).await,
        }
    }

    async fn upload(&self, metainfo: Vec<u8>, save_path: Option<&str>) -> Result<(), BackendError> {
        let path = "/command/upload";
        let length = metainfo.len();
        let part = Part::bytes(metainfo)
            .file_name("upload.torrent")
            .mime_str("application/x-bittorrent")?;
        let mut form = Form::new().part("torrents", part);
        if let Some(save_path) = save_path {
            form = form.text("savepath", save_path.to_string());
        }
        form = form.text("cookie", "").text("label", "");

        let response = self.client.post(self.make_request_url(path)).multipart(form).send().await?;
        let response = Self::check_status(path, response)?;
        let body = response.text().await?;
        if body.trim().eq_ignore_ascii_case("fails.") {
            return Err(BackendError::ResponseError(String::from("upload rejected")));
        }
        debug!("[BACKEND] Torrent uploaded ({length} bytes)");
        Ok(())
    }

    async fn fetch(&self, url: &str, cookies: Option<&str>) -> Result<Vec<u8>, BackendError> {
        debug!("[BACKEND] Fetching {url}");
        let mut request = self.client.get(url);
        if let Some(cookies) = cookies.filter(|cookies| !cookies.is_empty()) {
            request = request.header(COOKIE, cookies);
        }
        let response = Self::check_status(url, request.send().await?)?;
        Ok(response.bytes().await?.to_vec())
    }
}
