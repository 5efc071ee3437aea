use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use parking_lot::{Mutex, RwLock};
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::swarm_counts::SwarmCounts;
use crate::tracker::structs::torrent_entry::TorrentEntry;

impl TorrentEntry {
    pub fn new(info_hash: InfoHash, torrent_id: u64) -> TorrentEntry {
        TorrentEntry {
            info_hash,
            torrent_id,
            completed: AtomicU64::new(0),
            peers: RwLock::new(BTreeMap::new()),
        }
    }

    /// Returns the peer's shared record, creating a fresh one under the write lock
    /// when absent. The boolean is `true` when the record was created.
    ///
    /// `on_insert` runs only for a created record, before the write lock is released.
    pub fn get_or_insert_peer(&self, peer_id: PeerId, now: i64, on_insert: impl FnOnce()) -> (Arc<Mutex<Peer>>, bool)
    {
        if let Some(peer) = self.peers.read().get(&peer_id) {
            return (peer.clone(), false);
        }
        let mut lock = self.peers.write();
        if let Some(peer) = lock.get(&peer_id) {
            return (peer.clone(), false);
        }
        let peer = Arc::new(Mutex::new(Peer::new(self.info_hash, peer_id, self.torrent_id, now)));
        lock.insert(peer_id, peer.clone());
        on_insert();
        (peer, true)
    }

    /// Inserts a record built elsewhere (e.g. read back from a store) unless the
    /// peer is already known. Returns whether it was inserted.
    pub fn insert_peer(&self, peer: Peer, on_insert: impl FnOnce()) -> bool
    {
        let mut lock = self.peers.write();
        if lock.contains_key(&peer.peer_id) {
            return false;
        }
        lock.insert(peer.peer_id, Arc::new(Mutex::new(peer)));
        on_insert();
        true
    }

    pub fn get_peer(&self, peer_id: &PeerId) -> Option<Arc<Mutex<Peer>>> {
        self.peers.read().get(peer_id).cloned()
    }

    /// Drops the record; `on_remove` runs under the same write lock when there was one.
    pub fn remove_peer(&self, peer_id: &PeerId, on_remove: impl FnOnce()) -> Option<Arc<Mutex<Peer>>> {
        let mut lock = self.peers.write();
        let peer = lock.remove(peer_id)?;
        on_remove();
        Some(peer)
    }

    pub fn peers_count(&self) -> usize {
        self.peers.read().len()
    }

    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    pub fn increment_completed(&self) -> u64 {
        self.completed.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Up to `limit` active, reachable peers other than `skip`, in peer id order.
    /// With `ipv4_only`, peers with an IPv6 address are passed over without
    /// counting against `limit`.
    pub fn select_peers(&self, skip: &PeerId, limit: usize, ipv4_only: bool) -> Vec<Peer>
    {
        let lock = self.peers.read();
        let mut selected = Vec::with_capacity(limit.min(lock.len()));
        for (peer_id, peer) in lock.iter() {
            if selected.len() >= limit {
                break;
            }
            if peer_id == skip {
                continue;
            }
            let peer = peer.lock();
            if peer.active && peer.port > 0 && !(ipv4_only && peer.ip.is_ipv6()) {
                selected.push(peer.clone());
            }
        }
        selected
    }

    /// Seeders and leechers among the active peers of the first `limit` records.
    ///
    /// Larger swarms are only sampled; the counts are then a lower bound.
    pub fn swarm_counts(&self, limit: usize) -> SwarmCounts
    {
        let mut counts = SwarmCounts {
            completed: self.completed(),
            ..SwarmCounts::default()
        };
        let lock = self.peers.read();
        for peer in lock.values().take(limit) {
            let peer = peer.lock();
            if !peer.active {
                continue;
            }
            if peer.is_seeder() {
                counts.seeders += 1;
            } else {
                counts.leechers += 1;
            }
        }
        counts
    }
}
