//! Statistics enumerations.

/// Statistics event types.
pub mod stats_event;
