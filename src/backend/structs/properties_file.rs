use serde::{Deserialize, Serialize};

/// `priority` 0 means "do not download".
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PropertiesFile {
    pub name: String,
    pub size: i64,
    pub progress: f64,
    pub priority: i64,
    pub is_seed: bool,
}
