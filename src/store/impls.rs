//! Store implementation blocks.

/// PeerPatch field codec and conversion into Peer.
pub mod peer_patch;

/// Engine dispatch.
pub mod store_connector;

/// In-process store.
pub mod store_connector_memory;

/// Redis store.
pub mod store_connector_redis;

/// Sync queue and its worker.
pub mod peer_sync_queue;

/// Queue-backed hit-and-run notifier.
pub mod queued_hit_and_run_notifier;
