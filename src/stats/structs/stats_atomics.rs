use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub torrents: AtomicI64,
    pub peers: AtomicI64,
    pub seeds: AtomicI64,
    pub completed: AtomicI64,
    pub announces_handled: AtomicI64,
    pub scrapes_handled: AtomicI64,
    pub failures: AtomicI64,
    pub hit_and_runs: AtomicI64,
    pub sync_queued: AtomicI64,
    pub sync_failed: AtomicI64,
    pub uploaded: AtomicI64,
    pub downloaded: AtomicI64,
}
