use serde::{Deserialize, Serialize};
use crate::config::enums::empty_scrape_policy::EmptyScrapePolicy;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    /// Seconds clients are told to wait between announces.
    pub announce_interval: u64,
    /// Gaps longer than `announce_interval * active_interval_multiplier` do not count as active time.
    pub active_interval_multiplier: u64,
    pub default_numwant: u64,
    pub max_numwant: u64,
    pub whitelist_enabled: bool,
    pub hnr_enabled: bool,
    pub hnr_min_bytes: u64,
    /// Active seconds a leecher needs before it is no longer a hit-and-run.
    pub hnr_threshold: u64,
    pub scrape_peer_limit: u64,
    pub empty_scrape_policy: EmptyScrapePolicy,
    /// Adds a `peers6` key with 18-byte IPv6 entries to compact announces.
    pub compact_ipv6: bool,
    pub peers_timeout: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            announce_interval: 1800,
            active_interval_multiplier: 4,
            default_numwant: 50,
            max_numwant: 72,
            whitelist_enabled: false,
            hnr_enabled: false,
            hnr_min_bytes: 52_428_800,
            hnr_threshold: 86_400,
            scrape_peer_limit: 100,
            empty_scrape_policy: EmptyScrapePolicy::reject,
            compact_ipv6: false,
            peers_timeout: 2700,
        }
    }
}
