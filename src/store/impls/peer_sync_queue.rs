use std::sync::Arc;
use log::{debug, error};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::enums::sync_job::SyncJob;
use crate::store::errors::StoreError;
use crate::store::structs::peer_patch::PeerPatch;
use crate::store::structs::peer_sync_queue::PeerSyncQueue;
use crate::store::traits::peer_store::PeerStore;

/// Failed jobs, forwarded for out-of-band retry.
pub type SyncFailureSender = UnboundedSender<(SyncJob, StoreError)>;

impl PeerSyncQueue {
    /// A queue and the receiving end the worker drains.
    pub fn new(stats: Arc<StatsAtomics>) -> (PeerSyncQueue, UnboundedReceiver<SyncJob>)
    {
        let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
        (PeerSyncQueue { sender, stats }, receiver)
    }

    /// Creates the queue and spawns its worker on the current tokio runtime.
    pub fn start(store: Arc<dyn PeerStore>, stats: Arc<StatsAtomics>, failures: Option<SyncFailureSender>) -> (PeerSyncQueue, JoinHandle<()>)
    {
        let (queue, receiver) = PeerSyncQueue::new(stats.clone());
        let handle = tokio::spawn(PeerSyncQueue::run_worker(receiver, store, stats, failures));
        (queue, handle)
    }

    /// Applies jobs in arrival order until every sender is dropped.
    ///
    /// A failed job is logged, counted and forwarded; it is never retried here.
    pub async fn run_worker(mut receiver: UnboundedReceiver<SyncJob>, store: Arc<dyn PeerStore>, stats: Arc<StatsAtomics>, failures: Option<SyncFailureSender>)
    {
        while let Some(job) = receiver.recv().await {
            let result = match &job {
                SyncJob::SyncPeer(patch) => store.sync_peer(patch).await,
                SyncJob::AddHitAndRun { user_id, torrent_id } => store.add_hit_and_run(*user_id, *torrent_id).await,
            };
            match result {
                Ok(()) => debug!("[SYNC] {} done", job),
                Err(error) => {
                    error!("[SYNC] {} failed: {}", job, error);
                    stats.update(StatsEvent::SyncFailed, 1);
                    if let Some(failures) = &failures {
                        let _ = failures.send((job, error));
                    }
                }
            }
        }
        debug!("[SYNC] Queue closed, worker stopping");
    }

    pub fn push(&self, job: SyncJob) -> Result<(), StoreError>
    {
        self.sender.send(job).map_err(|_| StoreError::QueueClosed)?;
        self.stats.update(StatsEvent::SyncQueued, 1);
        Ok(())
    }

    pub fn sync_peer(&self, patch: PeerPatch) -> Result<(), StoreError>
    {
        self.push(SyncJob::SyncPeer(patch))
    }

    pub fn add_hit_and_run(&self, user_id: u64, torrent_id: u64) -> Result<(), StoreError>
    {
        self.push(SyncJob::AddHitAndRun { user_id, torrent_id })
    }
}
