//! Implementation blocks for tracker data structures.
//!
//! This module contains all the `impl` blocks that provide methods for the
//! tracker's data structures. Implementations are organized by the struct
//! they extend.

/// AnnounceEvent implementation: parsing and display.
pub mod announce_event;

/// InfoHash implementation: Display, FromStr, Serialize, Deserialize.
pub mod info_hash;

/// PeerId implementation: Display, FromStr, Serialize, prefix checks.
pub mod peer_id;

/// Peer implementation: creation and the announce update.
pub mod peer;

/// TorrentEntry implementation: peer membership, selection and counting.
pub mod torrent_entry;

/// TorrentTracker core implementation: initialization and persistence hooks.
pub mod torrent_tracker;

/// TorrentTracker announce/scrape request handlers.
pub mod torrent_tracker_handlers;

/// TorrentTracker peer management methods (lookup, ownership, reaping).
pub mod torrent_tracker_peers;

/// TorrentTracker torrent management methods (add, get, remove, hydrate).
pub mod torrent_tracker_torrents;

/// TorrentTracker client whitelist methods.
pub mod torrent_tracker_whitelist;
