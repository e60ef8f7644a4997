use serde_json::{json, Map, Value};

/// Transmission release the gateway reports itself as.
pub const TRANSMISSION_VERSION: &str = "2.84";

/// Reported by `free-space` and `download-dir-free-space`; the backend exposes no disk figures.
pub const FREE_SPACE_BYTES: i64 = 100 * (1 << 30);

/// Fields older clients still request although current Transmission no longer produces them.
pub const DEPRECATED_FIELDS: [&str; 6] = [
    "announceResponse",
    "seeders",
    "leechers",
    "downloadLimitMode",
    "uploadLimitMode",
    "nextAnnounceTime",
];

pub fn is_deprecated_field(field: &str) -> bool {
    DEPRECATED_FIELDS.contains(&field)
}

fn object<const N: usize>(entries: [(&str, Value); N]) -> Map<String, Value> {
    entries.into_iter().map(|(key, value)| (key.to_string(), value)).collect()
}

/// Every `torrent-get` field with the value used when the backend has no counterpart.
pub fn torrent_get_base() -> Map<String, Value> {
    object([
        ("activityDate", json!(0)),
        ("addedDate", json!(0)),
        ("bandwidthPriority", json!(0)),
        ("comment", json!("")),
        ("corruptEver", json!(0)),
        ("creator", json!("")),
        ("dateCreated", json!(0)),
        ("desiredAvailable", json!(0)),
        ("doneDate", json!(0)),
        ("downloadDir", json!("")),
        ("downloadedEver", json!(0)),
        ("downloadLimit", json!(0)),
        ("downloadLimited", json!(false)),
        ("error", json!(0)),
        ("errorString", json!("")),
        ("eta", json!(0)),
        ("etaIdle", json!(0)),
        ("files", json!([])),
        ("fileStats", json!([])),
        ("hashString", json!("")),
        ("haveUnchecked", json!(0)),
        ("haveValid", json!(0)),
        ("honorsSessionLimits", json!(true)),
        ("id", json!(0)),
        ("isFinished", json!(false)),
        ("isPrivate", json!(false)),
        ("isStalled", json!(false)),
        ("leftUntilDone", json!(0)),
        ("magnetLink", json!("")),
        ("manualAnnounceTime", json!(0)),
        ("maxConnectedPeers", json!(0)),
        ("metadataPercentComplete", json!(1)),
        ("name", json!("")),
        ("peer-limit", json!(0)),
        ("peers", json!([])),
        ("peersConnected", json!(0)),
        ("peersFrom", json!({
            "fromCache": 0,
            "fromDht": 0,
            "fromIncoming": 0,
            "fromLpd": 0,
            "fromLtep": 0,
            "fromPex": 0,
            "fromTracker": 0
        })),
        ("peersGettingFromUs", json!(0)),
        ("peersSendingToUs", json!(0)),
        ("percentDone", json!(0)),
        ("pieces", json!("")),
        ("pieceCount", json!(0)),
        ("pieceSize", json!(0)),
        ("priorities", json!([])),
        ("queuePosition", json!(0)),
        ("rateDownload", json!(0)),
        ("rateUpload", json!(0)),
        ("recheckProgress", json!(0)),
        ("secondsDownloading", json!(0)),
        ("secondsSeeding", json!(0)),
        ("seedIdleLimit", json!(0)),
        ("seedIdleMode", json!(0)),
        ("seedRatioLimit", json!(0)),
        ("seedRatioMode", json!(0)),
        ("sizeWhenDone", json!(0)),
        ("startDate", json!(0)),
        ("status", json!(0)),
        ("trackers", json!([])),
        ("trackerStats", json!([])),
        ("totalSize", json!(0)),
        ("torrentFile", json!("")),
        ("uploadedEver", json!(0)),
        ("uploadLimit", json!(0)),
        ("uploadLimited", json!(false)),
        ("uploadRatio", json!(0)),
        ("wanted", json!([])),
        ("webseeds", json!([])),
        ("webseedsSendingToUs", json!(0)),
    ])
}

/// One `trackerStats` entry; announce/scrape history is unknown so counters read -1.
pub fn tracker_stats_template() -> Map<String, Value> {
    object([
        ("announce", json!("")),
        ("announceState", json!(0)),
        ("downloadCount", json!(-1)),
        ("hasAnnounced", json!(false)),
        ("hasScraped", json!(false)),
        ("host", json!("")),
        ("id", json!(0)),
        ("isBackup", json!(false)),
        ("lastAnnouncePeerCount", json!(0)),
        ("lastAnnounceResult", json!("")),
        ("lastAnnounceStartTime", json!(0)),
        ("lastAnnounceSucceeded", json!(false)),
        ("lastAnnounceTime", json!(0)),
        ("lastAnnounceTimedOut", json!(false)),
        ("lastScrapeResult", json!("")),
        ("lastScrapeStartTime", json!(0)),
        ("lastScrapeSucceeded", json!(false)),
        ("lastScrapeTime", json!(0)),
        ("lastScrapeTimedOut", json!(0)),
        ("leecherCount", json!(-1)),
        ("nextAnnounceTime", json!(0)),
        ("nextScrapeTime", json!(0)),
        ("scrape", json!("")),
        ("scrapeState", json!(0)),
        ("seederCount", json!(-1)),
        ("tier", json!(0)),
    ])
}

pub fn session_get_base() -> Map<String, Value> {
    object([
        ("alt-speed-down", json!(50)),
        ("alt-speed-enabled", json!(false)),
        ("alt-speed-time-begin", json!(540)),
        ("alt-speed-time-day", json!(127)),
        ("alt-speed-time-enabled", json!(false)),
        ("alt-speed-time-end", json!(1020)),
        ("alt-speed-up", json!(50)),
        ("blocklist-enabled", json!(false)),
        ("blocklist-size", json!(0)),
        ("blocklist-url", json!("")),
        ("cache-size-mb", json!(4)),
        ("config-dir", json!("")),
        ("dht-enabled", json!(true)),
        ("download-dir", json!("")),
        ("download-dir-free-space", json!(FREE_SPACE_BYTES)),
        ("download-queue-enabled", json!(true)),
        ("download-queue-size", json!(5)),
        ("encryption", json!("preferred")),
        ("idle-seeding-limit", json!(30)),
        ("idle-seeding-limit-enabled", json!(false)),
        ("incomplete-dir", json!("")),
        ("incomplete-dir-enabled", json!(false)),
        ("lpd-enabled", json!(false)),
        ("peer-limit-global", json!(200)),
        ("peer-limit-per-torrent", json!(50)),
        ("peer-port", json!(51413)),
        ("peer-port-random-on-start", json!(false)),
        ("pex-enabled", json!(true)),
        ("port-forwarding-enabled", json!(true)),
        ("queue-stalled-enabled", json!(true)),
        ("queue-stalled-minutes", json!(30)),
        ("rename-partial-files", json!(true)),
        ("rpc-version", json!(15)),
        ("rpc-version-minimum", json!(1)),
        ("script-torrent-done-enabled", json!(false)),
        ("script-torrent-done-filename", json!("")),
        ("seed-queue-enabled", json!(false)),
        ("seed-queue-size", json!(10)),
        ("seedRatioLimit", json!(2)),
        ("seedRatioLimited", json!(false)),
        ("speed-limit-down", json!(100)),
        ("speed-limit-down-enabled", json!(false)),
        ("speed-limit-up", json!(100)),
        ("speed-limit-up-enabled", json!(false)),
        ("start-added-torrents", json!(true)),
        ("trash-original-torrent-files", json!(false)),
        ("units", json!({
            "speed-units": ["kB/s", "MB/s", "GB/s", "TB/s"],
            "speed-bytes": 1000,
            "size-units": ["kB", "MB", "GB", "TB"],
            "size-bytes": 1000,
            "memory-units": ["KiB", "MiB", "GiB", "TiB"],
            "memory-bytes": 1024
        })),
        ("utp-enabled", json!(true)),
        ("version", json!(TRANSMISSION_VERSION)),
    ])
}

pub fn session_stats_template() -> Map<String, Value> {
    object([
        ("activeTorrentCount", json!(0)),
        ("downloadSpeed", json!(0)),
        ("pausedTorrentCount", json!(0)),
        ("torrentCount", json!(0)),
        ("uploadSpeed", json!(0)),
        ("cumulative-stats", json!({
            "uploadedBytes": 0,
            "downloadedBytes": 0,
            "filesAdded": 0,
            "sessionCount": 1,
            "secondsActive": 0
        })),
        ("current-stats", json!({
            "uploadedBytes": 0,
            "downloadedBytes": 0,
            "filesAdded": 0,
            "sessionCount": 1,
            "secondsActive": 0
        })),
    ])
}
