use serde::{Deserialize, Serialize};
use crate::config::structs::store_config::StoreConfig;
use crate::config::structs::tracker_config::TrackerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    /// Approved client peer id prefixes, used when the whitelist is enabled.
    pub whitelist: Vec<String>,
    pub tracker_config: TrackerConfig,
    pub store_config: StoreConfig,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}
