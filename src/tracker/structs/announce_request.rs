use std::net::IpAddr;
use serde::Serialize;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// A validated announce.
///
/// Built by [`TorrentTracker::validate_announce`](crate::tracker::structs::torrent_tracker::TorrentTracker::validate_announce)
/// from the raw query map. `numwant` is already bounded by the configured maximum.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct AnnounceRequest {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub ip: IpAddr,
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub corrupt: u64,
    pub event: AnnounceEvent,
    pub numwant: u64,
    pub compact: bool,
    pub no_peer_id: bool,
}
