use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TorrentListItem {
    pub hash: String,
    pub name: String,
    pub size: i64,
    pub progress: f64,
    pub dlspeed: i64,
    pub upspeed: i64,
    pub priority: i64,
    pub num_seeds: i64,
    pub num_complete: i64,
    pub num_leechs: i64,
    pub num_incomplete: i64,
    pub ratio: f64,
    pub eta: i64,
    pub state: String,
}
