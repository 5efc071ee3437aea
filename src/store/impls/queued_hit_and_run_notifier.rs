use log::{error, info};
use crate::stats::traits::hit_and_run_notifier::HitAndRunNotifier;
use crate::store::structs::peer_sync_queue::PeerSyncQueue;
use crate::store::structs::queued_hit_and_run_notifier::QueuedHitAndRunNotifier;
use crate::tracker::structs::peer::Peer;

impl QueuedHitAndRunNotifier {
    pub fn new(queue: PeerSyncQueue) -> QueuedHitAndRunNotifier
    {
        QueuedHitAndRunNotifier { queue }
    }
}

impl HitAndRunNotifier for QueuedHitAndRunNotifier {
    fn notify(&self, peer: &Peer) {
        info!("[HNR] User {} ({}) on torrent {}", peer.user_id, peer.username, peer.torrent_id);
        if let Err(error) = self.queue.add_hit_and_run(peer.user_id, peer.torrent_id) {
            error!("[HNR] Unable to queue hit-and-run for user {}: {}", peer.user_id, error);
        }
    }
}
