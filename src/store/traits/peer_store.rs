use async_trait::async_trait;
use crate::store::errors::StoreError;
use crate::store::structs::peer_patch::PeerPatch;
use crate::store::structs::torrent_record::TorrentRecord;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer::Peer;

/// Durable swarm state behind the in-memory registry.
///
/// Adapters own their wire commands and key layout; the tracker only deals in
/// [`PeerPatch`] values and torrent records.
#[async_trait]
pub trait PeerStore: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;

    async fn get_torrent(&self, info_hash: &InfoHash) -> Result<Option<TorrentRecord>, StoreError>;

    /// At most `limit` stored peers of a torrent.
    async fn get_peers(&self, info_hash: &InfoHash, limit: usize) -> Result<Vec<Peer>, StoreError>;

    async fn sync_peer(&self, patch: &PeerPatch) -> Result<(), StoreError>;

    /// Adds the torrent to the user's hit-and-run set.
    async fn add_hit_and_run(&self, user_id: u64, torrent_id: u64) -> Result<(), StoreError>;
}
