use crate::config::structs::tracker_config::TrackerConfig;

impl TrackerConfig {
    /// Longest gap between two announces that still counts as continuous activity.
    pub fn active_ceiling(&self) -> i64 {
        self.announce_interval.saturating_mul(self.active_interval_multiplier).min(i64::MAX as u64) as i64
    }

    /// Bounds a requested peer count: zero means the default, anything else is capped.
    pub fn bounded_numwant(&self, requested: Option<u64>) -> u64 {
        match requested {
            None | Some(0) => self.default_numwant.min(self.max_numwant),
            Some(value) => value.min(self.max_numwant),
        }
    }
}
