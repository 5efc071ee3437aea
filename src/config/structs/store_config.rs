use crate::store::enums::store_engine::StoreEngine;
use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    pub enabled: bool,
    pub engine: StoreEngine,
    pub address: String,
    pub prefix: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            engine: StoreEngine::memory,
            address: "127.0.0.1:6379".to_string(),
            prefix: String::new(),
        }
    }
}
