#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagnetLink {
    pub info_hash: String,
    pub display_name: String,
    pub trackers: Vec<String>,
}
