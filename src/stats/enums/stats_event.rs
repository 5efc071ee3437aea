//! Statistics event types for tracking tracker activity.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Used with `TorrentTracker::update_stats()` to move a counter by a signed amount.
///
/// # Example
///
/// ```rust,ignore
/// use swarm_tracker::stats::enums::stats_event::StatsEvent;
///
/// tracker.update_stats(StatsEvent::AnnouncesHandled, 1);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Torrents,
    Peers,
    Seeds,
    Completed,
    AnnouncesHandled,
    ScrapesHandled,
    Failures,
    HitAndRuns,
    SyncQueued,
    SyncFailed,
    Uploaded,
    Downloaded,
}
