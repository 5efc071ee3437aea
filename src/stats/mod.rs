//! Swarm accounting and tracker counters.
//!
//! [`stats`] holds the pure functions the announce path uses to estimate
//! transfer speeds, classify seeders and detect hit-and-runs. The rest of the
//! module keeps atomic counters of tracker activity.
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::stats::enums::stats_event::StatsEvent;
//!
//! tracker.update_stats(StatsEvent::AnnouncesHandled, 1);
//! let stats = tracker.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Speed estimation, seeder and hit-and-run predicates.
#[allow(clippy::module_inception)]
pub mod stats;

/// Statistics data structures (atomic counters).
pub mod structs;

/// Hit-and-run notification hook.
pub mod traits;
