//! BitTorrent peer identifier.

/// A 20-byte peer id as sent by a client in the `peer_id` announce parameter.
///
/// The peer id is opaque to the tracker except for its prefix, which most
/// clients use to encode their name and version (`-AZ2060-` for Azureus 2.0.6.0).
/// The whitelist validator matches approved client signatures against that prefix.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerId(pub [u8; 20]);
