use crate::backend::structs::properties_file::PropertiesFile;
use crate::backend::structs::properties_general::PropertiesGeneral;
use crate::backend::structs::properties_tracker::PropertiesTracker;
use crate::backend::structs::torrent_list_item::TorrentListItem;

/// Records joined by hash for a single translation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TorrentView {
    pub id: i64,
    pub list: TorrentListItem,
    pub general: PropertiesGeneral,
    pub trackers: Vec<PropertiesTracker>,
    pub files: Vec<PropertiesFile>,
}
