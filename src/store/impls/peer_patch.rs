use std::collections::HashMap;
use std::str::FromStr;
use crate::store::errors::StoreError;
use crate::store::structs::peer_patch::PeerPatch;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_id::PeerId;

impl PeerPatch {
    /// Field name and textual value pairs, in the order adapters write them.
    pub fn fields(&self) -> Vec<(&'static str, String)>
    {
        fn flag(value: bool) -> String {
            String::from(if value { "1" } else { "0" })
        }

        vec![
            ("ip", self.ip.to_string()),
            ("port", self.port.to_string()),
            ("left", self.left.to_string()),
            ("first_announce", self.first_announce.to_string()),
            ("last_announce", self.last_announce.to_string()),
            ("total_time", self.total_time.to_string()),
            ("speed_up", self.speed_up.to_string()),
            ("speed_dn", self.speed_dn.to_string()),
            ("speed_up_max", self.speed_up_max.to_string()),
            ("speed_dn_max", self.speed_dn_max.to_string()),
            ("active", flag(self.active)),
            ("hnr_flagged", flag(self.hnr_flagged)),
            ("uploaded", self.uploaded.to_string()),
            ("downloaded", self.downloaded.to_string()),
            ("corrupt", self.corrupt.to_string()),
            ("username", self.username.clone()),
            ("user_id", self.user_id.to_string()),
            ("peer_id", self.peer_id.to_string()),
            ("torrent_id", self.torrent_id.to_string()),
            ("announces", self.announces.to_string()),
        ]
    }

    /// Rebuilds a patch from the fields written by [`PeerPatch::fields`].
    ///
    /// Missing counters read as zero; a missing or malformed `peer_id` or `ip` is an error.
    pub fn from_fields(info_hash: InfoHash, fields: &HashMap<String, String>) -> Result<PeerPatch, StoreError>
    {
        fn parse<T: FromStr + Default>(fields: &HashMap<String, String>, name: &str) -> Result<T, StoreError> {
            match fields.get(name) {
                None => Ok(T::default()),
                Some(value) => value.parse::<T>()
                    .map_err(|_| StoreError::SerializationError(format!("invalid {}", name))),
            }
        }

        let peer_id = fields.get("peer_id")
            .ok_or_else(|| StoreError::SerializationError(String::from("missing peer_id")))
            .and_then(|value| PeerId::from_str(value)
                .map_err(|_| StoreError::SerializationError(String::from("invalid peer_id"))))?;
        let ip = fields.get("ip")
            .ok_or_else(|| StoreError::SerializationError(String::from("missing ip")))
            .and_then(|value| value.parse()
                .map_err(|_| StoreError::SerializationError(String::from("invalid ip"))))?;
        let flag = |name: &str| matches!(fields.get(name).map(String::as_str), Some("1") | Some("true"));

        Ok(PeerPatch {
            info_hash,
            peer_id,
            ip,
            port: parse(fields, "port")?,
            left: parse(fields, "left")?,
            first_announce: parse(fields, "first_announce")?,
            last_announce: parse(fields, "last_announce")?,
            total_time: parse(fields, "total_time")?,
            speed_up: parse(fields, "speed_up")?,
            speed_dn: parse(fields, "speed_dn")?,
            speed_up_max: parse(fields, "speed_up_max")?,
            speed_dn_max: parse(fields, "speed_dn_max")?,
            active: flag("active"),
            hnr_flagged: flag("hnr_flagged"),
            uploaded: parse(fields, "uploaded")?,
            downloaded: parse(fields, "downloaded")?,
            corrupt: parse(fields, "corrupt")?,
            username: fields.get("username").cloned().unwrap_or_default(),
            user_id: parse(fields, "user_id")?,
            torrent_id: parse(fields, "torrent_id")?,
            announces: parse(fields, "announces")?,
        })
    }
}

impl From<PeerPatch> for Peer {
    fn from(patch: PeerPatch) -> Self {
        Peer {
            peer_id: patch.peer_id,
            info_hash: patch.info_hash,
            ip: patch.ip,
            port: patch.port,
            uploaded: patch.uploaded,
            downloaded: patch.downloaded,
            corrupt: patch.corrupt,
            left: patch.left,
            announces: patch.announces,
            total_time: patch.total_time,
            speed_up: patch.speed_up,
            speed_dn: patch.speed_dn,
            speed_up_max: patch.speed_up_max,
            speed_dn_max: patch.speed_dn_max,
            announce_first: patch.first_announce,
            announce_last: patch.last_announce,
            active: patch.active,
            hnr_flagged: patch.hnr_flagged,
            user_id: patch.user_id,
            username: patch.username,
            torrent_id: patch.torrent_id,
        }
    }
}
