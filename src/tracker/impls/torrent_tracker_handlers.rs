use std::collections::BTreeMap;
use std::net::IpAddr;
use std::str::FromStr;
use log::{debug, error};
use crate::common::common::{current_time, QueryMap};
use crate::config::enums::empty_scrape_policy::EmptyScrapePolicy;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_data::AnnounceData;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::scrape_request::ScrapeRequest;
use crate::tracker::structs::swarm_counts::SwarmCounts;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

fn get_required_bytes<'a>(query: &'a QueryMap, field: &str, expected_len: Option<usize>) -> Result<&'a [u8], TrackerError>
{
    let value = query.get(field)
        .ok_or_else(|| TrackerError::MalformedRequest(format!("missing {}", field)))?
        .first()
        .ok_or_else(|| TrackerError::MalformedRequest(format!("no {} given", field)))?;

    if let Some(len) = expected_len
        && value.len() != len {
            return Err(TrackerError::MalformedRequest(format!("invalid {} size", field)));
        }

    Ok(value.as_slice())
}

fn parse_integer<T: FromStr>(query: &QueryMap, field: &str) -> Result<T, TrackerError>
{
    let bytes = get_required_bytes(query, field, None)?;
    let str_value = std::str::from_utf8(bytes)
        .map_err(|_| TrackerError::MalformedRequest(format!("invalid {}", field)))?;
    str_value.parse::<T>()
        .map_err(|_| TrackerError::MalformedRequest(format!("invalid {}", field)))
}

fn parse_optional_integer<T: FromStr>(query: &QueryMap, field: &str) -> Option<T>
{
    query.get(field)
        .and_then(|v| v.first())
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
        .and_then(|s| s.parse::<T>().ok())
}

impl TorrentTracker {
    /// Turns a parsed announce query into an [`AnnounceRequest`].
    ///
    /// Nothing is touched in the registry; every error here leaves the swarm as it was.
    #[tracing::instrument(level = "debug", skip(self, query))]
    pub fn validate_announce(&self, remote_addr: IpAddr, query: &QueryMap) -> Result<AnnounceRequest, TrackerError>
    {
        let info_hash = InfoHash::try_from(get_required_bytes(query, "info_hash", Some(20))?)
            .map_err(|_| TrackerError::MalformedRequest(String::from("invalid info_hash size")))?;
        let peer_id = PeerId::try_from(get_required_bytes(query, "peer_id", Some(20))?)
            .map_err(|_| TrackerError::MalformedRequest(String::from("invalid peer_id size")))?;
        let port_integer = parse_integer::<u16>(query, "port")?;
        let uploaded_integer = parse_integer::<u64>(query, "uploaded")?;
        let downloaded_integer = parse_integer::<u64>(query, "downloaded")?;
        let left_integer = parse_integer::<u64>(query, "left")?;
        let corrupt_integer = parse_optional_integer::<u64>(query, "corrupt").unwrap_or(0);

        let event = match query.get("event").and_then(|v| v.first()) {
            None => AnnounceEvent::None,
            Some(bytes) => std::str::from_utf8(bytes)
                .map_err(|_| TrackerError::MalformedRequest(String::from("invalid event")))?
                .to_lowercase()
                .parse::<AnnounceEvent>()?,
        };

        let compact_bool = parse_optional_integer::<u8>(query, "compact")
            .map(|v| v == 1)
            .unwrap_or(false);

        let no_peer_id_bool = query.contains_key("no_peer_id");

        let numwant_integer = self.config.tracker_config.bounded_numwant(parse_optional_integer::<u64>(query, "numwant"));

        Ok(AnnounceRequest {
            info_hash,
            peer_id,
            ip: remote_addr,
            port: port_integer,
            uploaded: uploaded_integer,
            downloaded: downloaded_integer,
            left: left_integer,
            corrupt: corrupt_integer,
            event,
            numwant: numwant_integer,
            compact: compact_bool,
            no_peer_id: no_peer_id_bool,
        })
    }

    pub fn handle_announce(&self, request: AnnounceRequest) -> Result<AnnounceData, TrackerError>
    {
        self.handle_announce_at(request, current_time())
    }

    /// Processes a validated announce as of unix time `now`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_announce_at(&self, request: AnnounceRequest, now: i64) -> Result<AnnounceData, TrackerError>
    {
        let tracker_config = &self.config.tracker_config;

        if tracker_config.whitelist_enabled && !self.check_whitelist(&request.peer_id) {
            return Err(TrackerError::UnauthorizedClient);
        }

        let torrent = self.get_torrent(&request.info_hash).ok_or_else(|| {
            debug!("[HANDLE ANNOUNCE] Unregistered infohash {}", request.info_hash);
            TrackerError::UnknownTorrent
        })?;

        let (peer, created) = torrent.get_or_insert_peer(request.peer_id, now, || {
            self.index_peer(request.peer_id, request.info_hash);
        });
        if created {
            debug!("[HANDLE ANNOUNCE] Adding to infohash {} peerid {}", request.info_hash, request.peer_id);
            self.update_stats(StatsEvent::Peers, 1);
        }

        let (delta, patch, hit_and_run) = {
            let mut peer = peer.lock();
            let was_seed = peer.active && peer.is_seeder();
            let was_leecher = created || peer.left > 0;
            let delta = peer.update(&request, now, tracker_config.active_ceiling());
            let is_seed = peer.active && peer.is_seeder();

            if request.event == AnnounceEvent::Completed && peer.left == 0 && was_leecher {
                torrent.increment_completed();
                self.update_stats(StatsEvent::Completed, 1);
            }
            match (was_seed, is_seed) {
                (false, true) => { self.update_stats(StatsEvent::Seeds, 1); }
                (true, false) => { self.update_stats(StatsEvent::Seeds, -1); }
                _ => {}
            }

            let mut hit_and_run = None;
            if tracker_config.hnr_enabled
                && !peer.hnr_flagged
                && peer.is_hit_and_run(tracker_config.hnr_min_bytes, tracker_config.hnr_threshold) {
                    peer.hnr_flagged = true;
                    hit_and_run = Some(peer.clone());
                }
            (delta, peer.to_patch(), hit_and_run)
        };

        if let Some(peer) = hit_and_run {
            debug!("[HANDLE ANNOUNCE] Hit-and-run by peerid {} on infohash {}", peer.peer_id, peer.info_hash);
            self.update_stats(StatsEvent::HitAndRuns, 1);
            if let Some(notifier) = &self.hnr_notifier {
                notifier.notify(&peer);
            }
        }

        self.queue_sync(patch);

        let numwant = request.numwant.min(usize::MAX as u64) as usize;
        let ipv4_only = request.compact && !tracker_config.compact_ipv6;
        let peers = torrent.select_peers(&request.peer_id, numwant, ipv4_only);
        let counts = torrent.swarm_counts(usize::MAX);

        self.update_stats(StatsEvent::AnnouncesHandled, 1);
        self.update_stats(StatsEvent::Uploaded, delta.uploaded.min(i64::MAX as u64) as i64);
        self.update_stats(StatsEvent::Downloaded, delta.downloaded.min(i64::MAX as u64) as i64);

        Ok(AnnounceData {
            interval: tracker_config.announce_interval,
            complete: counts.seeders,
            incomplete: counts.leechers,
            peers,
            delta,
            compact: request.compact,
            no_peer_id: request.no_peer_id,
        })
    }

    /// Collects the `info_hash` parameters of a scrape, in request order.
    #[tracing::instrument(level = "debug", skip(self, query))]
    pub fn validate_scrape(&self, query: &QueryMap) -> Result<ScrapeRequest, TrackerError>
    {
        let values = query.get("info_hash").map(Vec::as_slice).unwrap_or(&[]);
        if values.is_empty() && self.config.tracker_config.empty_scrape_policy == EmptyScrapePolicy::reject {
            return Err(TrackerError::MalformedRequest(String::from("missing info_hash")));
        }

        let info_hashes = values.iter()
            .map(|value| InfoHash::try_from(value.as_slice())
                .map_err(|_| TrackerError::MalformedRequest(String::from("invalid info_hash size"))))
            .collect::<Result<Vec<InfoHash>, TrackerError>>()?;

        Ok(ScrapeRequest { info_hashes })
    }

    /// Counts for every requested torrent the registry knows; unknown ones are left out.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_scrape(&self, request: &ScrapeRequest) -> Result<BTreeMap<InfoHash, SwarmCounts>, TrackerError>
    {
        let tracker_config = &self.config.tracker_config;
        let limit = tracker_config.scrape_peer_limit.min(usize::MAX as u64) as usize;

        let info_hashes = if request.info_hashes.is_empty() {
            match tracker_config.empty_scrape_policy {
                EmptyScrapePolicy::reject => {
                    error!("[HANDLE SCRAPE] Scrape without info hashes reached the processor");
                    return Err(TrackerError::MalformedRequest(String::from("missing info_hash")));
                }
                EmptyScrapePolicy::empty => vec![],
                EmptyScrapePolicy::full => self.get_torrent_hashes(),
            }
        } else {
            request.info_hashes.clone()
        };

        let mut files = BTreeMap::new();
        for info_hash in info_hashes {
            if let Some(torrent) = self.get_torrent(&info_hash) {
                files.insert(info_hash, torrent.swarm_counts(limit));
            }
        }

        self.update_stats(StatsEvent::ScrapesHandled, 1);
        Ok(files)
    }
}
