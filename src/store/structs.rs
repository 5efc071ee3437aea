//! Store data structures.

/// Persisted peer fields.
pub mod peer_patch;

/// Persisted torrent fields.
pub mod torrent_record;

/// Engine-dispatching connector.
pub mod store_connector;

/// In-process store.
pub mod store_connector_memory;

/// Redis store.
pub mod store_connector_redis;

/// Sender side of the persistence worker.
pub mod peer_sync_queue;

/// Hit-and-run notifier backed by the sync queue.
pub mod queued_hit_and_run_notifier;
