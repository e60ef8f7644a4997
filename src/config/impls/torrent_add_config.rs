use std::time::Duration;
use crate::config::structs::torrent_add_config::TorrentAddConfig;

impl Default for TorrentAddConfig {
    fn default() -> Self {
        TorrentAddConfig {
            poll_attempts: 100,
            poll_interval_ms: 50,
        }
    }
}

impl TorrentAddConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Upper bound of the time spent waiting for a submitted torrent.
    pub fn budget(&self) -> Duration {
        self.poll_interval() * self.poll_attempts
    }
}
