use std::net::{IpAddr, Ipv4Addr};
use crate::stats::stats::{estimate_speed, is_hit_and_run, is_seeder};
use crate::store::structs::peer_patch::PeerPatch;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::transfer_delta::TransferDelta;

impl Peer {
    /// A fresh, inactive record with zeroed counters.
    ///
    /// The address is a loopback placeholder with port 0 until the first
    /// [`update`](Peer::update) fills it in, so a just-created peer is never
    /// handed out to other clients.
    pub fn new(info_hash: InfoHash, peer_id: PeerId, torrent_id: u64, now: i64) -> Peer
    {
        Peer {
            peer_id,
            info_hash,
            ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            uploaded: 0,
            downloaded: 0,
            corrupt: 0,
            left: 0,
            announces: 0,
            total_time: 0,
            speed_up: 0.0,
            speed_dn: 0.0,
            speed_up_max: 0.0,
            speed_dn_max: 0.0,
            announce_first: now,
            announce_last: now,
            active: false,
            hnr_flagged: false,
            user_id: 0,
            username: String::new(),
            torrent_id,
        }
    }

    /// Applies an announce to the record and returns the bytes it credits.
    ///
    /// A `started` event, or reported totals lower than the stored ones, mean the
    /// client restarted its counters: the reported values become the new baseline
    /// and nothing is credited. `active_ceiling` bounds the gap between two
    /// announces that still counts as continuous activity.
    ///
    /// Only `stopped` deactivates the record. Any other event, `completed` and
    /// the empty event included, reactivates a peer that had stopped.
    pub fn update(&mut self, announce: &AnnounceRequest, now: i64, active_ceiling: i64) -> TransferDelta
    {
        self.announces += 1;
        self.peer_id = announce.peer_id;

        let mut delta = TransferDelta::default();
        let restarted = announce.event == AnnounceEvent::Started
            || announce.uploaded < self.uploaded
            || announce.downloaded < self.downloaded;

        if restarted {
            self.uploaded = announce.uploaded;
            self.downloaded = announce.downloaded;
        } else {
            if announce.uploaded != self.uploaded {
                delta.uploaded = announce.uploaded - self.uploaded;
                self.uploaded = announce.uploaded;
            }
            if announce.downloaded != self.downloaded {
                delta.downloaded = announce.downloaded - self.downloaded;
                self.downloaded = announce.downloaded;
            }
        }

        self.ip = announce.ip;
        self.port = announce.port;
        self.left = announce.left;
        self.corrupt = announce.corrupt;

        self.speed_up = estimate_speed(self.announce_last, now, delta.uploaded);
        self.speed_dn = estimate_speed(self.announce_last, now, delta.downloaded);
        if self.speed_up > self.speed_up_max {
            self.speed_up_max = self.speed_up;
        }
        if self.speed_dn > self.speed_dn_max {
            self.speed_dn_max = self.speed_dn;
        }

        if self.active && self.announce_last > 0 {
            let elapsed = now - self.announce_last;
            if elapsed > 0 && elapsed < active_ceiling {
                self.total_time += elapsed as u64;
            }
        }

        self.active = announce.event != AnnounceEvent::Stopped;
        self.announce_last = now;

        delta
    }

    #[inline]
    pub fn is_seeder(&self) -> bool {
        is_seeder(self)
    }

    #[inline]
    pub fn is_hit_and_run(&self, min_bytes: u64, max_active_seconds: u64) -> bool {
        is_hit_and_run(self, min_bytes, max_active_seconds)
    }

    pub fn set_user(&mut self, user_id: u64, username: &str) {
        self.user_id = user_id;
        self.username = username.to_string();
    }

    /// Persisted view of the record.
    pub fn to_patch(&self) -> PeerPatch
    {
        PeerPatch {
            info_hash: self.info_hash,
            peer_id: self.peer_id,
            ip: self.ip,
            port: self.port,
            left: self.left,
            first_announce: self.announce_first,
            last_announce: self.announce_last,
            total_time: self.total_time,
            speed_up: self.speed_up,
            speed_dn: self.speed_dn,
            speed_up_max: self.speed_up_max,
            speed_dn_max: self.speed_dn_max,
            active: self.active,
            hnr_flagged: self.hnr_flagged,
            uploaded: self.uploaded,
            downloaded: self.downloaded,
            corrupt: self.corrupt,
            username: self.username.clone(),
            user_id: self.user_id,
            torrent_id: self.torrent_id,
            announces: self.announces,
        }
    }
}
