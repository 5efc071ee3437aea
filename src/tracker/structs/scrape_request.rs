//! Scrape request query parameters.

use serde::Serialize;
use crate::tracker::structs::info_hash::InfoHash;

/// Parsed scrape request.
///
/// Holds the `info_hash` parameters in the order they were sent. Multiple
/// hashes may be queried at once:
///
/// ```text
/// GET /scrape?info_hash=%xx...&info_hash=%yy...
/// ```
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub info_hashes: Vec<InfoHash>,
}
