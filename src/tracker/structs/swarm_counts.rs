use serde::Serialize;

/// Seeder, leecher and lifetime completion counts of one torrent.
#[derive(Serialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct SwarmCounts {
    pub seeders: u64,
    pub leechers: u64,
    pub completed: u64,
}
