//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The info hash is the SHA-1 hash of the "info" dictionary in a torrent file.
/// It uniquely identifies a swarm and is the primary key of the registry.
///
/// # Canonical form
///
/// The canonical string form is 40 lowercase hexadecimal characters. It is what
/// [`Display`](std::fmt::Display) produces, what scrape responses use as dictionary
/// keys, and what persistence adapters use to build their keys.
///
/// # Example
///
/// ```rust
/// use swarm_tracker::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash([0xab; 20]);
/// assert_eq!(hash.to_string(), "ab".repeat(20));
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
