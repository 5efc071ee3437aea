//! Persistence of swarm state.
//!
//! The registry is authoritative while the process runs; the store keeps a
//! durable copy for restarts and for other services reading peer and
//! hit-and-run data.
//!
//! # Architecture
//!
//! - `PeerStore` trait defines the interface
//! - `StoreConnectorMemory` and `StoreConnectorRedis` implement it
//! - `StoreConnector` selects the configured engine
//! - `PeerSyncQueue` carries writes off the announce path to a spawned worker
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::store::structs::peer_sync_queue::PeerSyncQueue;
//!
//! let store = Arc::new(StoreConnector::new(&config.store_config).await?);
//! let (queue, worker) = PeerSyncQueue::start(store, tracker_stats, None);
//! ```

/// Store engine and sync job enumerations.
pub mod enums;

/// Error types for store operations.
pub mod errors;

/// Implementation blocks for store connectors.
pub mod impls;

/// Data structures for store connections.
pub mod structs;

/// Store backend trait definitions.
pub mod traits;
