use std::sync::atomic::{AtomicI64, Ordering};
use crate::common::common::current_time;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new() -> StatsAtomics
    {
        StatsAtomics {
            started: AtomicI64::new(current_time()),
            ..StatsAtomics::default()
        }
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::Torrents => &self.torrents,
            StatsEvent::Peers => &self.peers,
            StatsEvent::Seeds => &self.seeds,
            StatsEvent::Completed => &self.completed,
            StatsEvent::AnnouncesHandled => &self.announces_handled,
            StatsEvent::ScrapesHandled => &self.scrapes_handled,
            StatsEvent::Failures => &self.failures,
            StatsEvent::HitAndRuns => &self.hit_and_runs,
            StatsEvent::SyncQueued => &self.sync_queued,
            StatsEvent::SyncFailed => &self.sync_failed,
            StatsEvent::Uploaded => &self.uploaded,
            StatsEvent::Downloaded => &self.downloaded,
        }
    }

    pub fn update(&self, event: StatsEvent, value: i64)
    {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn snapshot(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            torrents: self.torrents.load(Ordering::SeqCst),
            peers: self.peers.load(Ordering::SeqCst),
            seeds: self.seeds.load(Ordering::SeqCst),
            completed: self.completed.load(Ordering::SeqCst),
            announces_handled: self.announces_handled.load(Ordering::SeqCst),
            scrapes_handled: self.scrapes_handled.load(Ordering::SeqCst),
            failures: self.failures.load(Ordering::SeqCst),
            hit_and_runs: self.hit_and_runs.load(Ordering::SeqCst),
            sync_queued: self.sync_queued.load(Ordering::SeqCst),
            sync_failed: self.sync_failed.load(Ordering::SeqCst),
            uploaded: self.uploaded.load(Ordering::SeqCst),
            downloaded: self.downloaded.load(Ordering::SeqCst),
        }
    }
}
