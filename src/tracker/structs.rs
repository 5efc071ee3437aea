//! Data structures for BitTorrent tracker operations.
//!
//! Core identifier types, the peer record, the registry and the request and
//! response types of announce and scrape processing.

/// Main tracker instance struct.
///
/// The registry of torrents and peers, with configuration, whitelist,
/// counters and the persistence hooks.
pub mod torrent_tracker;

/// Validated announce request.
pub mod announce_request;

/// Processed announce, ready for encoding.
pub mod announce_data;

/// 20-byte torrent info hash identifier.
///
/// A wrapper around `[u8; 20]` that implements common traits for use as
/// a map key and for serialization.
pub mod info_hash;

/// 20-byte peer identifier.
///
/// A wrapper around `[u8; 20]` representing the unique peer ID sent by
/// BitTorrent clients in announce requests.
pub mod peer_id;

/// Per-swarm peer record.
pub mod peer;

/// Validated scrape request.
pub mod scrape_request;

/// Seeder, leecher and completion counts.
pub mod swarm_counts;

/// Registered torrent with its peer map.
pub mod torrent_entry;

/// Bytes credited by an announce.
pub mod transfer_delta;
