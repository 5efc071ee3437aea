//! Statistics implementation blocks.

/// Counter updates and snapshots.
pub mod stats_atomics;

/// `get_stats` / `update_stats` on the tracker.
pub mod torrent_tracker;
