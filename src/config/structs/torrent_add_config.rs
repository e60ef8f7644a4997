use serde::{Deserialize, Serialize};

/// How long `torrent-add` waits for the backend to index a submitted torrent.
///
/// The wait is bounded: at most `poll_attempts` listings, each one preceded by
/// a `poll_interval_ms` pause.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorrentAddConfig {
    pub poll_attempts: u32,
    pub poll_interval_ms: u64,
}
