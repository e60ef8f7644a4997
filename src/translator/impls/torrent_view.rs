use serde_json::{json, Map, Value};
use crate::translator::pieces::make_pieces_bitfield;
use crate::translator::structs::status_mapping::StatusMapping;
use crate::translator::structs::torrent_view::TorrentView;
use crate::translator::templates::{torrent_get_base, tracker_stats_template};

impl TorrentView {
    /// Builds the complete Transmission torrent object.
    #[tracing::instrument(level = "debug", skip(self), fields(hash = %self.list.hash))]
    pub fn translate(&self) -> Map<String, Value> {
        let mut translated = torrent_get_base();
        self.map_torrent_list(&mut translated);
        self.map_properties_general(&mut translated);
        self.map_properties_trackers(&mut translated);
        self.map_properties_files(&mut translated);
        translated.insert(String::from("id"), json!(self.id));
        translated
    }

    pub fn map_torrent_list(&self, dst: &mut Map<String, Value>) {
        let list = &self.list;
        let mapping = StatusMapping::from_state(&list.state);
        let left = remaining_bytes(list.size, list.progress);

        dst.insert(String::from("hashString"), json!(list.hash));
        dst.insert(String::from("name"), json!(list.name));
        dst.insert(String::from("recheckProgress"), json!(list.progress));
        dst.insert(String::from("sizeWhenDone"), json!(list.size));
        dst.insert(String::from("rateDownload"), json!(list.dlspeed));
        dst.insert(String::from("rateUpload"), json!(list.upspeed));
        dst.insert(String::from("uploadRatio"), json!(list.ratio));
        dst.insert(String::from("eta"), json!(list.eta));
        dst.insert(String::from("status"), json!(mapping.status.code()));
        dst.insert(String::from("error"), json!(mapping.error.code()));
        dst.insert(String::from("isStalled"), json!(mapping.stalled));
        dst.insert(String::from("percentDone"), json!(list.progress));
        dst.insert(String::from("peersGettingFromUs"), json!(list.num_leechs));
        dst.insert(String::from("peersSendingToUs"), json!(list.num_seeds));
        dst.insert(String::from("leftUntilDone"), json!(left));
        // Availability is not exposed by the backend.
        dst.insert(String::from("desiredAvailable"), json!(left));
        dst.insert(String::from("haveUnchecked"), json!(0));
    }

    pub fn map_properties_general(&self, dst: &mut Map<String, Value>) {
        let general = &self.general;

        dst.insert(String::from("downloadDir"), json!(general.save_path));
        dst.insert(String::from("pieceSize"), json!(general.piece_size));
        dst.insert(String::from("pieceCount"), json!(general.pieces_num));
        dst.insert(String::from("addedDate"), json!(general.addition_date));
        dst.insert(String::from("startDate"), json!(general.addition_date));
        dst.insert(String::from("comment"), json!(general.comment));
        dst.insert(String::from("dateCreated"), json!(general.creation_date));
        dst.insert(String::from("creator"), json!(general.created_by));
        dst.insert(String::from("doneDate"), json!(general.completion_date));
        dst.insert(String::from("totalSize"), json!(general.total_size));
        dst.insert(String::from("haveValid"), json!(general.piece_size.saturating_mul(general.pieces_have)));
        dst.insert(String::from("downloadedEver"), json!(general.total_downloaded));
        dst.insert(String::from("uploadedEver"), json!(general.total_uploaded));
        dst.insert(String::from("pieces"), json!(make_pieces_bitfield(general.pieces_num, general.pieces_have)));
        dst.insert(String::from("peersConnected"), json!(general.peers));
        dst.insert(String::from("corruptEver"), json!(general.total_wasted));
        dst.insert(String::from("secondsSeeding"), json!(general.seeding_time));

        let (upload_limited, upload_limit) = limit(general.up_limit);
        dst.insert(String::from("uploadLimited"), json!(upload_limited));
        dst.insert(String::from("uploadLimit"), json!(upload_limit));
        let (download_limited, download_limit) = limit(general.dl_limit);
        dst.insert(String::from("downloadLimited"), json!(download_limited));
        dst.insert(String::from("downloadLimit"), json!(download_limit));

        dst.insert(String::from("maxConnectedPeers"), json!(general.nb_connections_limit));
        dst.insert(String::from("peer-limit"), json!(general.nb_connections_limit));
    }

    pub fn map_properties_trackers(&self, dst: &mut Map<String, Value>) {
        let mut trackers = Vec::with_capacity(self.trackers.len());
        let mut tracker_stats = Vec::with_capacity(self.trackers.len());

        for (index, tracker) in self.trackers.iter().enumerate() {
            trackers.push(json!({
                "announce": tracker.url,
                "id": index,
                "scrape": tracker.url,
                "tier": 0
            }));

            let mut stats = tracker_stats_template();
            stats.insert(String::from("announce"), json!(tracker.url));
            stats.insert(String::from("id"), json!(index));
            stats.insert(String::from("lastAnnouncePeerCount"), json!(tracker.num_peers));
            stats.insert(String::from("lastAnnounceResult"), json!(tracker.msg));
            tracker_stats.push(Value::Object(stats));
        }

        dst.insert(String::from("trackers"), Value::Array(trackers));
        dst.insert(String::from("trackerStats"), Value::Array(tracker_stats));
    }

    pub fn map_properties_files(&self, dst: &mut Map<String, Value>) {
        let mut files = Vec::with_capacity(self.files.len());
        let mut file_stats = Vec::with_capacity(self.files.len());
        let mut priorities = Vec::with_capacity(self.files.len());
        let mut wanted = Vec::with_capacity(self.files.len());

        for file in &self.files {
            let completed = completed_bytes(file.size, file.progress);
            let priority = map_file_priority(file.priority);
            let is_wanted = file.priority != 0;

            files.push(json!({
                "bytesCompleted": completed,
                "length": file.size,
                "name": file.name
            }));
            file_stats.push(json!({
                "bytesCompleted": completed,
                "wanted": is_wanted,
                "priority": priority
            }));
            priorities.push(json!(priority));
            wanted.push(json!(i64::from(is_wanted)));
        }

        dst.insert(String::from("files"), Value::Array(files));
        dst.insert(String::from("fileStats"), Value::Array(file_stats));
        dst.insert(String::from("priorities"), Value::Array(priorities));
        dst.insert(String::from("wanted"), Value::Array(wanted));
    }
}

/// qBittorrent file priority (0 skip, 1 normal, 2-7 raised) → Transmission (0 normal, 1 high).
pub fn map_file_priority(priority: i64) -> i64 {
    match priority {
        2..=7 => 1,
        _ => 0,
    }
}

/// Negative backend limits mean unlimited and are displayed as 0.
fn limit(value: i64) -> (bool, i64) {
    if value >= 0 { (true, value) } else { (false, 0) }
}

fn completed_bytes(size: i64, progress: f64) -> i64 {
    (size as f64 * progress).round() as i64
}

fn remaining_bytes(size: i64, progress: f64) -> i64 {
    (size as f64 * (1.0 - progress)).round() as i64
}
