use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::enums::sync_job::SyncJob;

/// Fire-and-forget handle onto the persistence worker.
///
/// Cloning is cheap; all clones feed the same worker.
#[derive(Debug, Clone)]
pub struct PeerSyncQueue {
    pub(crate) sender: UnboundedSender<SyncJob>,
    pub(crate) stats: Arc<StatsAtomics>,
}
