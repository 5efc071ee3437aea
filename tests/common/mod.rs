#![allow(dead_code)]
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use rand::RngExt;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tempfile::TempDir;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::tracker::enums::announce_event::AnnounceEvent;
use swarm_tracker::tracker::structs::announce_request::AnnounceRequest;
use swarm_tracker::tracker::structs::info_hash::InfoHash;
use swarm_tracker::tracker::structs::peer_id::PeerId;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;

pub type TestTracker = Arc<TorrentTracker>;

pub const NOW: i64 = 1_700_000_000;

pub fn create_test_config() -> Configuration {
    let mut config: Configuration = Configuration::init();
    config.log_level = String::from("debug");
    config
}

pub fn create_test_tracker(config: Configuration) -> TestTracker {
    Arc::new(TorrentTracker::new(Arc::new(config)))
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId(bytes)
}

/// A Transmission-style peer id whose last byte is `n`.
pub fn client_peer_id(prefix: &[u8; 8], n: u8) -> PeerId {
    let mut bytes = [b'0'; 20];
    bytes[..8].copy_from_slice(prefix);
    bytes[19] = n;
    PeerId(bytes)
}

pub fn announce_request(info_hash: InfoHash, peer_id: PeerId, event: AnnounceEvent, uploaded: u64, downloaded: u64, left: u64) -> AnnounceRequest {
    AnnounceRequest {
        info_hash,
        peer_id,
        ip: IpAddr::V4(Ipv4Addr::new(10, 0, 0, peer_id.0[19])),
        port: 6881,
        uploaded,
        downloaded,
        left,
        corrupt: 0,
        event,
        numwant: 50,
        compact: true,
        no_peer_id: false,
    }
}

/// A raw announce query string, percent-encoded the way clients send it.
pub fn announce_query(info_hash: &InfoHash, peer_id: &PeerId, port: u16, left: u64, extra: &str) -> String {
    format!(
        "info_hash={}&peer_id={}&port={}&uploaded=0&downloaded=0&left={}{}",
        percent_encode(&info_hash.0, NON_ALPHANUMERIC),
        percent_encode(&peer_id.0, NON_ALPHANUMERIC),
        port,
        left,
        extra
    )
}

pub fn scrape_query(info_hashes: &[InfoHash]) -> String {
    info_hashes.iter()
        .map(|info_hash| format!("info_hash={}", percent_encode(&info_hash.0, NON_ALPHANUMERIC)))
        .collect::<Vec<String>>()
        .join("&")
}
