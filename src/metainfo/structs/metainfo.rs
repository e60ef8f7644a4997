#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metainfo {
    pub info_hash: String,
    pub name: String,
    pub total_length: i64,
}
