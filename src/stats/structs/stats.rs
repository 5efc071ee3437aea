use serde::Serialize;

/// Point-in-time copy of the tracker counters.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub torrents: i64,
    pub peers: i64,
    pub seeds: i64,
    pub completed: i64,
    pub announces_handled: i64,
    pub scrapes_handled: i64,
    pub failures: i64,
    pub hit_and_runs: i64,
    pub sync_queued: i64,
    pub sync_failed: i64,
    pub uploaded: i64,
    pub downloaded: i64,
}
