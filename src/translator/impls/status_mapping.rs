use crate::translator::enums::torrent_error::TorrentError;
use crate::translator::enums::torrent_status::TorrentStatus;
use crate::translator::structs::status_mapping::StatusMapping;

impl StatusMapping {
    /// Maps a qBittorrent state string. Unknown states read as stopped.
    pub fn from_state(state: &str) -> StatusMapping {
        let status = match state {
            "checkingUP" | "checkingDL" => TorrentStatus::Check,
            "queuedDL" => TorrentStatus::DownloadWait,
            "downloading" | "stalledDL" => TorrentStatus::Download,
            "queuedUP" => TorrentStatus::SeedWait,
            "uploading" | "stalledUP" => TorrentStatus::Seed,
            _ => TorrentStatus::Stopped,
        };
        let error = match state {
            "error" => TorrentError::LocalError,
            _ => TorrentError::Ok,
        };
        StatusMapping {
            status,
            error,
            stalled: matches!(state, "stalledDL" | "stalledUP"),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.status == TorrentStatus::Stopped
    }

    /// Checking, downloading or seeding with traffic.
    pub fn is_active(&self) -> bool {
        !self.stalled && matches!(self.status, TorrentStatus::Check | TorrentStatus::Download | TorrentStatus::Seed)
    }
}
