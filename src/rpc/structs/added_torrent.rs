use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AddedTorrent {
    pub id: i64,
    pub name: String,
    #[serde(rename = "hashString")]
    pub hash_string: String,
}
