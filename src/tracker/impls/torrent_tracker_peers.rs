use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub(crate) fn index_peer(&self, peer_id: PeerId, info_hash: InfoHash)
    {
        self.peer_index.write().entry(peer_id).or_default().insert(info_hash);
    }

    pub(crate) fn unindex_peer(&self, peer_id: &PeerId, info_hash: &InfoHash)
    {
        let mut lock = self.peer_index.write();
        if let Some(hashes) = lock.get_mut(peer_id) {
            hashes.remove(info_hash);
            if hashes.is_empty() {
                lock.remove(peer_id);
            }
        }
    }

    /// Snapshot of one peer record.
    pub fn get_peer(&self, info_hash: &InfoHash, peer_id: &PeerId) -> Option<Peer>
    {
        let torrent = self.get_torrent(info_hash)?;
        let peer = torrent.get_peer(peer_id)?;
        let snapshot = peer.lock().clone();
        Some(snapshot)
    }

    /// Snapshots of every record the peer id has, across torrents.
    pub fn find_peer(&self, peer_id: &PeerId) -> Vec<Peer>
    {
        let hashes: Vec<InfoHash> = match self.peer_index.read().get(peer_id) {
            None => return vec![],
            Some(hashes) => hashes.iter().copied().collect(),
        };
        hashes.iter().filter_map(|info_hash| self.get_peer(info_hash, peer_id)).collect()
    }

    /// Assigns the owning user of a peer record. Returns `false` if there is no such record.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn set_peer_user(&self, info_hash: &InfoHash, peer_id: &PeerId, user_id: u64, username: &str) -> bool
    {
        let Some(peer) = self.get_torrent(info_hash).and_then(|torrent| torrent.get_peer(peer_id)) else {
            return false;
        };
        peer.lock().set_user(user_id, username);
        true
    }

    /// Peers that stopped, or have not announced within `timeout` seconds of `now`.
    pub fn reap_eligible(&self, now: i64, timeout: u64) -> Vec<(InfoHash, PeerId)>
    {
        let timeout = timeout.min(i64::MAX as u64) as i64;
        let torrents: Vec<_> = self.torrents.read().values().cloned().collect();
        let mut eligible = vec![];
        for torrent in torrents {
            let lock = torrent.peers.read();
            for (peer_id, peer) in lock.iter() {
                let peer = peer.lock();
                if !peer.active || now - peer.announce_last > timeout {
                    eligible.push((torrent.info_hash, *peer_id));
                }
            }
        }
        eligible
    }

    /// Drops a peer record. Returns `false` if there was none.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove_peer(&self, info_hash: &InfoHash, peer_id: &PeerId) -> bool
    {
        let Some(torrent) = self.get_torrent(info_hash) else {
            return false;
        };
        let Some(peer) = torrent.remove_peer(peer_id, || self.unindex_peer(peer_id, info_hash)) else {
            return false;
        };
        let active_seed = {
            let peer = peer.lock();
            peer.active && peer.is_seeder()
        };
        self.update_stats(StatsEvent::Peers, -1);
        if active_seed {
            self.update_stats(StatsEvent::Seeds, -1);
        }
        true
    }
}
