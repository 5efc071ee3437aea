use std::collections::BTreeSet;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::stats::traits::hit_and_run_notifier::HitAndRunNotifier;
use crate::store::structs::peer_sync_queue::PeerSyncQueue;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::types::ahash_map::AHashMap;

/// The swarm registry and the entry point of announce and scrape processing.
///
/// Shared behind an `Arc` by every request task. All processing methods are
/// synchronous; persistence happens on the sync queue's worker.
pub struct TorrentTracker {
    pub config: Arc<Configuration>,
    pub torrents: RwLock<AHashMap<InfoHash, Arc<TorrentEntry>>>,
    /// Peer id to the info hashes it currently has a record in.
    pub peer_index: RwLock<AHashMap<PeerId, BTreeSet<InfoHash>>>,
    pub whitelist: RwLock<Vec<String>>,
    pub stats: Arc<StatsAtomics>,
    pub sync_queue: Option<PeerSyncQueue>,
    pub hnr_notifier: Option<Arc<dyn HitAndRunNotifier>>,
}
