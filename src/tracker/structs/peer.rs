use std::net::IpAddr;
use serde::Serialize;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// State of one peer inside one swarm.
///
/// A record is created with zeroed counters on the first announce of an unseen
/// (info hash, peer id) pair and is afterwards only changed through
/// [`Peer::update`]. `left == 0` marks a seeder.
#[derive(Serialize, PartialEq, Debug, Clone)]
pub struct Peer {
    pub peer_id: PeerId,
    pub info_hash: InfoHash,
    pub ip: IpAddr,
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub corrupt: u64,
    pub left: u64,
    pub announces: u64,
    /// Cumulative seconds spent active in the swarm.
    pub total_time: u64,
    pub speed_up: f64,
    pub speed_dn: f64,
    pub speed_up_max: f64,
    pub speed_dn_max: f64,
    pub announce_first: i64,
    pub announce_last: i64,
    pub active: bool,
    /// Set once a hit-and-run has been reported for this peer.
    pub hnr_flagged: bool,
    pub user_id: u64,
    pub username: String,
    pub torrent_id: u64,
}
