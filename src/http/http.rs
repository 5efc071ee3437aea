use std::borrow::Cow;
use std::collections::BTreeMap;
use std::net::IpAddr;
use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BMutAccess, BencodeMut};
use byteorder::{BigEndian, WriteBytesExt};
use log::{debug, error};
use crate::common::common::parse_query;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_data::AnnounceData;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::swarm_counts::SwarmCounts;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

#[inline]
fn ben_count(value: u64) -> i64 {
    value.min(i64::MAX as u64) as i64
}

fn encoding_failure(error: std::io::Error) -> TrackerError {
    TrackerError::EncodingFailure(error.to_string())
}

/// Packs IPv4 peers as 4 address bytes and 2 port bytes, both big-endian.
///
/// Peers without a port and `skip_id` are left out. IPv6 peers have no place in
/// this format and are skipped as well.
pub fn make_compact_peers(peers: &[Peer], skip_id: &PeerId) -> Result<Vec<u8>, TrackerError>
{
    let mut compact = Vec::with_capacity(peers.len() * 6);
    for peer in peers {
        if peer.port == 0 || &peer.peer_id == skip_id {
            continue;
        }
        match peer.ip {
            IpAddr::V4(ip) => {
                compact.write_u32::<BigEndian>(u32::from(ip)).map_err(encoding_failure)?;
                compact.write_u16::<BigEndian>(peer.port).map_err(encoding_failure)?;
            }
            IpAddr::V6(ip) => {
                debug!("[COMPACT] Skipping IPv6 peer {} ({})", peer.peer_id, ip);
            }
        }
    }
    Ok(compact)
}

/// 18-byte entries (16 address bytes, 2 port bytes) for the IPv6 peers.
pub fn make_compact_peers6(peers: &[Peer], skip_id: &PeerId) -> Result<Vec<u8>, TrackerError>
{
    let mut compact = Vec::new();
    for peer in peers {
        if peer.port == 0 || &peer.peer_id == skip_id {
            continue;
        }
        if let IpAddr::V6(ip) = peer.ip {
            compact.write_u128::<BigEndian>(u128::from(ip)).map_err(encoding_failure)?;
            compact.write_u16::<BigEndian>(peer.port).map_err(encoding_failure)?;
        }
    }
    Ok(compact)
}

/// The non-compact `peers` list of dictionaries.
pub fn make_peer_list(peers: &[Peer], skip_id: &PeerId, no_peer_id: bool) -> Result<BencodeMut<'static>, TrackerError>
{
    let mut peers_list = ben_list!();
    let peers_list_mut = peers_list.list_mut()
        .ok_or_else(|| TrackerError::EncodingFailure(String::from("peer list is not a list")))?;
    for peer in peers {
        if peer.port == 0 || &peer.peer_id == skip_id {
            continue;
        }
        if no_peer_id {
            peers_list_mut.push(ben_map! {
                "ip" => ben_bytes!(peer.ip.to_string()),
                "port" => ben_int!(peer.port as i64)
            });
        } else {
            peers_list_mut.push(ben_map! {
                "peer id" => ben_bytes!(peer.peer_id.0.to_vec()),
                "ip" => ben_bytes!(peer.ip.to_string()),
                "port" => ben_int!(peer.port as i64)
            });
        }
    }
    Ok(peers_list)
}

pub fn http_announce_response(data: &AnnounceData, requester: &PeerId, compact_ipv6: bool) -> Result<Vec<u8>, TrackerError>
{
    let interval = ben_int!(ben_count(data.interval));
    let complete = ben_int!(ben_count(data.complete));
    let incomplete = ben_int!(ben_count(data.incomplete));

    if !data.compact {
        let peers = make_peer_list(&data.peers, requester, data.no_peer_id)?;
        return Ok(ben_map! {
            "interval" => interval,
            "complete" => complete,
            "incomplete" => incomplete,
            "peers" => peers
        }.encode());
    }

    let peers = make_compact_peers(&data.peers, requester)?;
    if compact_ipv6 {
        let peers6 = make_compact_peers6(&data.peers, requester)?;
        return Ok(ben_map! {
            "interval" => interval,
            "complete" => complete,
            "incomplete" => incomplete,
            "peers" => ben_bytes!(peers),
            "peers6" => ben_bytes!(peers6)
        }.encode());
    }
    Ok(ben_map! {
        "interval" => interval,
        "complete" => complete,
        "incomplete" => incomplete,
        "peers" => ben_bytes!(peers)
    }.encode())
}

/// One dictionary per torrent, keyed by the lowercase hex info hash.
pub fn http_scrape_response(files: &BTreeMap<InfoHash, SwarmCounts>) -> Result<Vec<u8>, TrackerError>
{
    let mut scrape_list = ben_map!();
    let scrape_list_mut = scrape_list.dict_mut()
        .ok_or_else(|| TrackerError::EncodingFailure(String::from("scrape response is not a dictionary")))?;
    for (info_hash, counts) in files.iter() {
        scrape_list_mut.insert(Cow::from(info_hash.to_string().into_bytes()), ben_map! {
            "complete" => ben_int!(ben_count(counts.seeders)),
            "incomplete" => ben_int!(ben_count(counts.leechers)),
            "downloaded" => ben_int!(ben_count(counts.completed))
        });
    }
    Ok(scrape_list.encode())
}

pub fn http_failure_response(error: &TrackerError) -> Vec<u8>
{
    ben_map! {
        "failure reason" => ben_bytes!(error.to_string())
    }.encode()
}

/// Maps a request error to its response body. Encoding failures get no body at all.
fn http_error_body(tracker: &TorrentTracker, error: TrackerError) -> Vec<u8>
{
    tracker.update_stats(StatsEvent::Failures, 1);
    match error {
        TrackerError::EncodingFailure(_) => {
            error!("[HTTP] {}", error);
            vec![]
        }
        _ => {
            debug!("[HTTP] Request failed: {}", error);
            http_failure_response(&error)
        }
    }
}

/// Full announce: query parsing, validation, processing and encoding.
///
/// `query_string` is the raw, still percent-encoded query; `remote_ip` is the
/// address the boundary layer attributes the request to.
pub fn http_service_announce(remote_ip: IpAddr, query_string: Option<String>, tracker: &TorrentTracker) -> Vec<u8>
{
    let result = parse_query(query_string)
        .and_then(|query| tracker.validate_announce(remote_ip, &query))
        .and_then(|request| {
            let requester = request.peer_id;
            let data = tracker.handle_announce(request)?;
            http_announce_response(&data, &requester, tracker.config.tracker_config.compact_ipv6)
        });

    match result {
        Ok(body) => body,
        Err(error) => http_error_body(tracker, error),
    }
}

pub fn http_service_scrape(query_string: Option<String>, tracker: &TorrentTracker) -> Vec<u8>
{
    let result = parse_query(query_string)
        .and_then(|query| tracker.validate_scrape(&query))
        .and_then(|request| tracker.handle_scrape(&request))
        .and_then(|files| http_scrape_response(&files));

    match result {
        Ok(body) => body,
        Err(error) => http_error_body(tracker, error),
    }
}
