use std::net::IpAddr;
use serde::Serialize;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// The persisted fields of a peer record, independent of any store.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PeerPatch {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub ip: IpAddr,
    pub port: u16,
    pub left: u64,
    pub first_announce: i64,
    pub last_announce: i64,
    pub total_time: u64,
    pub speed_up: f64,
    pub speed_dn: f64,
    pub speed_up_max: f64,
    pub speed_dn_max: f64,
    pub active: bool,
    pub hnr_flagged: bool,
    pub uploaded: u64,
    pub downloaded: u64,
    pub corrupt: u64,
    pub username: String,
    pub user_id: u64,
    pub torrent_id: u64,
    pub announces: u64,
}
