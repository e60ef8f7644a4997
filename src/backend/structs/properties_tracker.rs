use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `status` is a string on old Web API versions and a number on newer ones.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PropertiesTracker {
    pub url: String,
    pub status: Value,
    pub num_peers: i64,
    pub msg: String,
}
