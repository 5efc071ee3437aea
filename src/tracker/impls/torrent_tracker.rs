use std::sync::Arc;
use log::{error, info};
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::stats::traits::hit_and_run_notifier::HitAndRunNotifier;
use crate::store::structs::peer_patch::PeerPatch;
use crate::store::structs::peer_sync_queue::PeerSyncQueue;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::types::ahash_map::AHashMap;

impl TorrentTracker {
    pub fn new(config: Arc<Configuration>) -> TorrentTracker
    {
        let whitelist = config.whitelist.clone();
        if config.tracker_config.whitelist_enabled {
            info!("[WHITELIST] Enabled with {} client prefixes", whitelist.len());
        }

        TorrentTracker {
            config,
            torrents: RwLock::new(AHashMap::default()),
            peer_index: RwLock::new(AHashMap::default()),
            whitelist: RwLock::new(whitelist),
            stats: Arc::new(StatsAtomics::new()),
            sync_queue: None,
            hnr_notifier: None,
        }
    }

    /// Routes peer state changes to a persistence worker.
    pub fn with_sync_queue(mut self, queue: PeerSyncQueue) -> TorrentTracker
    {
        self.sync_queue = Some(queue);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn HitAndRunNotifier>) -> TorrentTracker
    {
        self.hnr_notifier = Some(notifier);
        self
    }

    /// Hands a peer's persisted state to the sync queue, if one is attached.
    pub fn queue_sync(&self, patch: PeerPatch)
    {
        if let Some(queue) = &self.sync_queue
            && let Err(error) = queue.sync_peer(patch) {
                error!("[SYNC] Unable to queue peer update: {}", error);
            }
    }
}
