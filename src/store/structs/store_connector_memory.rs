use std::collections::BTreeSet;
use parking_lot::RwLock;
use crate::store::structs::peer_patch::PeerPatch;
use crate::store::structs::torrent_record::TorrentRecord;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::types::ahash_map::AHashMap;

#[derive(Debug, Default)]
pub struct StoreConnectorMemory {
    pub(crate) torrents: RwLock<AHashMap<InfoHash, TorrentRecord>>,
    pub(crate) peers: RwLock<AHashMap<InfoHash, AHashMap<PeerId, PeerPatch>>>,
    pub(crate) hit_and_runs: RwLock<AHashMap<u64, BTreeSet<u64>>>,
}
