use serde::{Deserialize, Serialize};
use std::fmt;

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum StoreEngine {
    #[default]
    memory,
    redis,
}

impl fmt::Display for StoreEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreEngine::memory => write!(f, "memory"),
            StoreEngine::redis => write!(f, "redis"),
        }
    }
}

impl StoreEngine {
    pub fn url_scheme(&self) -> &'static str {
        match self {
            StoreEngine::memory => "",
            StoreEngine::redis => "redis://",
        }
    }
}
