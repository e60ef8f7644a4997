#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdEntry {
    Id(i64),
    Hash(String),
}
