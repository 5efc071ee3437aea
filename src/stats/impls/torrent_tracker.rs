use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn get_stats(&self) -> Stats
    {
        self.stats.snapshot()
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.stats.update(event, value);
        self.get_stats()
    }
}
