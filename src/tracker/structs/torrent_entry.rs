use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use parking_lot::{Mutex, RwLock};
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_id::PeerId;

/// A registered torrent and its swarm.
///
/// The peer map lock guards membership only; every peer carries its own mutex
/// so announces of different peers on the same torrent do not serialize.
#[derive(Debug)]
pub struct TorrentEntry {
    pub info_hash: InfoHash,
    pub torrent_id: u64,
    /// Lifetime count of completed downloads.
    pub completed: AtomicU64,
    pub peers: RwLock<BTreeMap<PeerId, Arc<Mutex<Peer>>>>,
}
