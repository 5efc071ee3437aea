//! # Swarm Tracker
//!
//! The core of a private BitTorrent tracker: swarm state, announce and scrape
//! processing, and bencoded responses with compact peer lists.
//!
//! ## Overview
//!
//! The crate keeps the authoritative per-peer and per-torrent state in memory,
//! credits upload and download deltas per announce, estimates transfer speeds,
//! counts seeders and leechers, and enforces a client whitelist and a
//! hit-and-run policy. Peer state is mirrored to a key/value store through a
//! fire-and-forget sync queue.
//!
//! The HTTP server is not part of the crate. An application hands the raw query
//! string and the client address to [`http::http::http_service_announce`] or
//! [`http::http::http_service_scrape`] and sends back the bytes they return.
//!
//! ## BEP Compliance
//!
//! - BEP 3: The BitTorrent Protocol Specification
//! - BEP 7: IPv6 Tracker Extension (`peers6`)
//! - BEP 23: Tracker Returns Compact Peer Lists
//! - BEP 48: Tracker Protocol Extension: Scrape
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::http::http::http_service_announce;
//! use swarm_tracker::store::structs::peer_sync_queue::PeerSyncQueue;
//! use swarm_tracker::store::structs::store_connector::StoreConnector;
//! use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", true)?);
//! swarm_tracker::common::common::setup_logging(&config)?;
//!
//! let store = Arc::new(StoreConnector::new(&config.store_config).await?);
//! let tracker = TorrentTracker::new(config.clone());
//! let (queue, _worker) = PeerSyncQueue::start(store, tracker.stats.clone(), None);
//! let tracker = Arc::new(tracker.with_sync_queue(queue));
//!
//! tracker.add_torrent(info_hash, 42);
//! let body = http_service_announce(remote_ip, Some(query_string), &tracker);
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Query parsing, hex conversion, logging setup, timestamps
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - Bencoded responses and the announce/scrape entry points
//! - [`stats`] - Speed and hit-and-run accounting, tracker counters
//! - [`store`] - Persistence contract, memory and Redis stores, sync queue
//! - [`tracker`] - Swarm registry, announce and scrape processing

/// Common utilities and shared functionality.
///
/// Contains helper functions for query parsing, hex conversion and logging
/// setup used across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, saving and validating TOML configuration files.
pub mod config;

/// Tracker protocol responses.
///
/// Encodes announce, scrape and failure responses and chains parsing,
/// processing and encoding for each request.
pub mod http;

/// Swarm accounting and statistics.
///
/// Speed estimation, seeder and hit-and-run predicates, and atomic counters
/// of tracker activity.
pub mod stats;

/// Persistence of swarm state.
///
/// The `PeerStore` trait, its memory and Redis implementations and the
/// background sync queue.
pub mod store;

/// Core tracker logic.
///
/// The registry of torrents and peers with the announce and scrape processors.
pub mod tracker;
