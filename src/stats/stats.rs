//! Pure swarm accounting functions.

use crate::tracker::structs::peer::Peer;

/// Average transfer rate in bytes per second over the gap between two announces.
///
/// Returns `0.0` when the gap is zero or negative (clock skew, duplicate announce).
///
/// ```rust
/// use swarm_tracker::stats::stats::estimate_speed;
///
/// assert_eq!(estimate_speed(1000, 1010, 5000), 500.0);
/// assert_eq!(estimate_speed(1000, 1000, 5000), 0.0);
/// ```
pub fn estimate_speed(last: i64, now: i64, delta: u64) -> f64
{
    let elapsed = now - last;
    if elapsed <= 0 {
        return 0.0;
    }
    delta as f64 / elapsed as f64
}

#[inline]
pub fn is_seeder(peer: &Peer) -> bool {
    peer.left == 0
}

/// A leecher that took at least `min_bytes` and has been active for less than
/// `max_active_seconds`.
pub fn is_hit_and_run(peer: &Peer, min_bytes: u64, max_active_seconds: u64) -> bool
{
    peer.downloaded >= min_bytes && peer.left > 0 && peer.total_time < max_active_seconds
}
