//! Common utilities and shared functionality.
//!
//! This module contains helper functions used across the other modules of
//! the tracker core.
//!
//! # Utilities
//!
//! - Query string parsing (percent-decoded, repeated keys preserved)
//! - Hex encoding/decoding for 20-byte identifiers
//! - Logging setup
//! - Timestamp utilities
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::common::common::{parse_query, current_time};
//!
//! let params = parse_query(Some(String::from("info_hash=%ab%cd...&peer_id=-AZ2060-...")))?;
//! let now = current_time();
//! ```

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
