use crate::tracker::structs::peer::Peer;

/// Receives each peer the tracker flags as a hit-and-run.
///
/// Called at most once per peer record, synchronously on the announce path,
/// so implementations should hand the work off rather than block.
#[cfg_attr(test, mockall::automock)]
pub trait HitAndRunNotifier: Send + Sync {
    fn notify(&self, peer: &Peer);
}
