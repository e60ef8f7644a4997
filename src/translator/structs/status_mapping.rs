use crate::translator::enums::torrent_error::TorrentError;
use crate::translator::enums::torrent_status::TorrentStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMapping {
    pub status: TorrentStatus,
    pub error: TorrentError,
    pub stalled: bool,
}
