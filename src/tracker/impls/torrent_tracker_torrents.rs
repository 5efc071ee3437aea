use std::sync::Arc;
use std::sync::atomic::Ordering;
use log::{debug, info};
use crate::stats::enums::stats_event::StatsEvent;
use crate::store::errors::StoreError;
use crate::store::traits::peer_store::PeerStore;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::swarm_counts::SwarmCounts;
use crate::tracker::structs::torrent_entry::TorrentEntry;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Registers a torrent. Returns `false` when it was already registered.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn add_torrent(&self, info_hash: InfoHash, torrent_id: u64) -> bool
    {
        let mut lock = self.torrents.write();
        if lock.contains_key(&info_hash) {
            return false;
        }
        lock.insert(info_hash, Arc::new(TorrentEntry::new(info_hash, torrent_id)));
        self.update_stats(StatsEvent::Torrents, 1);
        true
    }

    #[inline]
    pub fn get_torrent(&self, info_hash: &InfoHash) -> Option<Arc<TorrentEntry>>
    {
        self.torrents.read().get(info_hash).cloned()
    }

    /// Unregisters a torrent together with its swarm.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove_torrent(&self, info_hash: &InfoHash) -> Option<Arc<TorrentEntry>>
    {
        let torrent = self.torrents.write().remove(info_hash)?;
        self.update_stats(StatsEvent::Torrents, -1);

        let active_seeds: Vec<bool> = {
            let lock = torrent.peers.write();
            lock.iter().map(|(peer_id, peer)| {
                self.unindex_peer(peer_id, info_hash);
                let peer = peer.lock();
                peer.active && peer.is_seeder()
            }).collect()
        };
        for active_seed in active_seeds {
            self.update_stats(StatsEvent::Peers, -1);
            if active_seed {
                self.update_stats(StatsEvent::Seeds, -1);
            }
        }
        debug!("[TORRENTS] Removed {}", info_hash);
        Some(torrent)
    }

    pub fn torrents_count(&self) -> usize
    {
        self.torrents.read().len()
    }

    pub fn get_torrent_hashes(&self) -> Vec<InfoHash>
    {
        self.torrents.read().keys().copied().collect()
    }

    /// Exact seeder and leecher counts of a registered torrent.
    pub fn swarm_counts(&self, info_hash: &InfoHash) -> Option<SwarmCounts>
    {
        self.get_torrent(info_hash).map(|torrent| torrent.swarm_counts(usize::MAX))
    }

    /// Loads a torrent and up to `peer_limit` of its peers from the store.
    ///
    /// Peers already in the registry are left untouched. Returns the number of
    /// peers added; a torrent unknown to the store registers nothing.
    #[tracing::instrument(level = "debug", skip(self, store))]
    pub async fn hydrate_torrent(&self, store: &dyn PeerStore, info_hash: InfoHash, peer_limit: usize) -> Result<usize, StoreError>
    {
        let Some(record) = store.get_torrent(&info_hash).await? else {
            debug!("[HYDRATE] {} not found in store", info_hash);
            return Ok(0);
        };
        let peers = store.get_peers(&info_hash, peer_limit).await?;

        self.add_torrent(info_hash, record.torrent_id);
        let Some(torrent) = self.get_torrent(&info_hash) else {
            return Ok(0);
        };
        torrent.completed.fetch_max(record.completed, Ordering::Relaxed);

        let mut added = 0;
        for peer in peers {
            let peer_id = peer.peer_id;
            let active_seed = peer.active && peer.is_seeder();
            if torrent.insert_peer(peer, || self.index_peer(peer_id, info_hash)) {
                self.update_stats(StatsEvent::Peers, 1);
                if active_seed {
                    self.update_stats(StatsEvent::Seeds, 1);
                }
                added += 1;
            }
        }
        info!("[HYDRATE] Loaded {} with {} peers", info_hash, added);
        Ok(added)
    }
}
