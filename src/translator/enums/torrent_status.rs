/// Transmission `tr_torrent_activity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TorrentStatus {
    Stopped = 0,
    CheckWait = 1,
    Check = 2,
    DownloadWait = 3,
    Download = 4,
    SeedWait = 5,
    Seed = 6,
}
