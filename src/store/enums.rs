//! Store enumerations.

/// Store engine selection (memory, redis).
pub mod store_engine;

/// Jobs carried by the sync queue.
pub mod sync_job;
