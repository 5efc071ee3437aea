use crate::store::structs::peer_sync_queue::PeerSyncQueue;

/// Records hit-and-runs by queueing an `AddHitAndRun` job.
#[derive(Debug, Clone)]
pub struct QueuedHitAndRunNotifier {
    pub(crate) queue: PeerSyncQueue,
}
