use serde::Serialize;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::transfer_delta::TransferDelta;

/// Outcome of a processed announce, ready to be encoded.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AnnounceData {
    pub interval: u64,
    pub complete: u64,
    pub incomplete: u64,
    /// Selected peers, excluding the requester.
    pub peers: Vec<Peer>,
    /// Bytes credited by this announce, for ratio accounting outside the tracker.
    pub delta: TransferDelta,
    pub compact: bool,
    pub no_peer_id: bool,
}
