use async_trait::async_trait;
use log::debug;
use crate::store::errors::StoreError;
use crate::store::structs::peer_patch::PeerPatch;
use crate::store::structs::store_connector_memory::StoreConnectorMemory;
use crate::store::structs::torrent_record::TorrentRecord;
use crate::store::traits::peer_store::PeerStore;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_id::PeerId;

impl StoreConnectorMemory {
    pub fn new() -> StoreConnectorMemory
    {
        StoreConnectorMemory::default()
    }

    pub fn insert_torrent(&self, record: TorrentRecord)
    {
        self.torrents.write().insert(record.info_hash, record);
    }

    pub fn get_peer_patch(&self, info_hash: &InfoHash, peer_id: &PeerId) -> Option<PeerPatch>
    {
        self.peers.read().get(info_hash).and_then(|peers| peers.get(peer_id).cloned())
    }

    pub fn get_hit_and_runs(&self, user_id: u64) -> Vec<u64>
    {
        self.hit_and_runs.read().get(&user_id).map(|set| set.iter().copied().collect()).unwrap_or_default()
    }
}

#[async_trait]
impl PeerStore for StoreConnectorMemory {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn get_torrent(&self, info_hash: &InfoHash) -> Result<Option<TorrentRecord>, StoreError> {
        Ok(self.torrents.read().get(info_hash).copied())
    }

    async fn get_peers(&self, info_hash: &InfoHash, limit: usize) -> Result<Vec<Peer>, StoreError> {
        let lock = self.peers.read();
        Ok(lock.get(info_hash)
            .map(|peers| peers.values().take(limit).cloned().map(Peer::from).collect())
            .unwrap_or_default())
    }

    async fn sync_peer(&self, patch: &PeerPatch) -> Result<(), StoreError> {
        self.peers.write()
            .entry(patch.info_hash)
            .or_default()
            .insert(patch.peer_id, patch.clone());
        debug!("[Memory] Synced peer {} on {}", patch.peer_id, patch.info_hash);
        Ok(())
    }

    async fn add_hit_and_run(&self, user_id: u64, torrent_id: u64) -> Result<(), StoreError> {
        self.hit_and_runs.write().entry(user_id).or_default().insert(torrent_id);
        Ok(())
    }
}
