use std::fmt;
use crate::store::structs::peer_patch::PeerPatch;

/// A unit of work for the persistence worker.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncJob {
    SyncPeer(PeerPatch),
    AddHitAndRun { user_id: u64, torrent_id: u64 },
}

impl fmt::Display for SyncJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncJob::SyncPeer(patch) => write!(f, "sync peer {} on {}", patch.peer_id, patch.info_hash),
            SyncJob::AddHitAndRun { user_id, torrent_id } => write!(f, "hit-and-run user {} torrent {}", user_id, torrent_id),
        }
    }
}
