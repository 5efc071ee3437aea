//! Core BitTorrent tracker implementation.
//!
//! This module holds the swarm registry and the announce and scrape
//! processors.
//!
//! # Architecture
//!
//! - Torrents live in an aHash map behind a `RwLock`, keyed by info hash
//! - Each torrent keeps its peers in a `BTreeMap` behind its own `RwLock`
//! - Each peer record has its own `Mutex`, so only announces of the same peer serialize
//! - A secondary index maps peer ids to the torrents they announce on
//!
//! # Main Components
//!
//! - `TorrentTracker` - The registry and processing entry points
//! - `InfoHash` - 20-byte torrent identifier
//! - `PeerId` - 20-byte peer identifier
//! - `TorrentEntry` - Registered torrent and its peers
//! - `Peer` - Per-swarm peer record and its update rules
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//! use std::sync::Arc;
//!
//! let config = Arc::new(Configuration::init());
//! let tracker = TorrentTracker::new(config);
//! tracker.add_torrent(info_hash, 42);
//! let request = tracker.validate_announce(remote_ip, &query)?;
//! let data = tracker.handle_announce(request)?;
//! ```

/// Enumerations for tracker operations.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for tracker operations.
pub mod structs;

/// Type aliases for registry collections.
pub mod types;
