//! Tracker protocol responses over HTTP.
//!
//! Encodes announce and scrape outcomes as bencoded dictionaries, as specified
//! in BEP 3, with compact peer lists from BEP 23 and the `peers6` key from BEP 7.
//! The HTTP server itself is left to the embedding application: it passes the
//! raw query string and the client address to [`http::http_service_announce`]
//! or [`http::http_service_scrape`] and sends back the returned body.
//!
//! # Response Format
//!
//! - announce: `interval`, `complete`, `incomplete`, `peers` (and optionally `peers6`)
//! - scrape: one `complete`/`incomplete`/`downloaded` dictionary per hex info hash
//! - failure: `failure reason`

/// Response encoding and request entry points.
#[allow(clippy::module_inception)]
pub mod http;
