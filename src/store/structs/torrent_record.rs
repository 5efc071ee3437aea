use serde::{Deserialize, Serialize};
use crate::tracker::structs::info_hash::InfoHash;

/// A torrent as known to the store.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TorrentRecord {
    pub info_hash: InfoHash,
    pub torrent_id: u64,
    pub completed: u64,
}
