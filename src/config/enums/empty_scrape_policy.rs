use serde::{Deserialize, Serialize};

/// What a scrape without any `info_hash` parameter gets.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum EmptyScrapePolicy {
    /// Answer with a `malformed request` failure.
    #[default]
    reject,
    /// Answer with an empty scrape dictionary.
    empty,
    /// Answer with every registered torrent.
    full,
}
