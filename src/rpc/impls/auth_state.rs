use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::{debug, info, warn};
use parking_lot::Mutex;
use crate::backend::traits::torrent_backend::TorrentBackend;
use crate::rpc::structs::auth_state::AuthState;

impl AuthState {
    pub fn new(required: bool) -> AuthState {
        AuthState {
            required,
            credentials: Mutex::new(None),
        }
    }

    /// Checks the `Authorization` header of a request.
    ///
    /// Credentials matching the cached pair pass without a backend round trip.
    /// Any other pair is a fresh login attempt and replaces the cache on success.
    #[tracing::instrument(level = "debug", skip(self, backend, header))]
    pub async fn authenticate(&self, backend: &dyn TorrentBackend, header: Option<&str>) -> bool {
        if !self.required {
            return true;
        }
        let Some((username, password)) = header.and_then(parse_basic_credentials) else {
            debug!("[RPC] Request without Basic credentials");
            return false;
        };

        let cached = self.credentials.lock()
            .as_ref()
            .is_some_and(|(cached_username, cached_password)| *cached_username == username && *cached_password == password);
        if cached {
            return true;
        }

        match backend.login(&username, &password).await {
            Ok(true) => {
                info!("[RPC] Logged in to the backend as {username}");
                let mut lock = self.credentials.lock();
                *lock = Some((username, password));
                true
            }
            Ok(false) => {
                warn!("[RPC] Backend rejected the credentials of {username}");
                false
            }
            Err(error) => {
                warn!("[RPC] Backend login failed: {error}");
                false
            }
        }
    }
}

/// Splits `Basic <base64(user:password)>` into its parts.
pub fn parse_basic_credentials(header: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}
