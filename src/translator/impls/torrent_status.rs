use crate::translator::enums::torrent_error::TorrentError;
use crate::translator::enums::torrent_status::TorrentStatus;

impl TorrentStatus {
    pub fn code(self) -> i64 {
        self as i64
    }
}

impl TorrentError {
    pub fn code(self) -> i64 {
        self as i64
    }
}
