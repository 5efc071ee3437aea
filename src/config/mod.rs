//! Configuration management module.
//!
//! Loads, saves and validates the tracker configuration as TOML. Every section
//! and field has a default, so a partial file is enough.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `error`, `warn`, `info`, `debug` or `trace`
//! - **tracker_config**: announce interval, peer counts, whitelist, hit-and-run and scrape policy
//! - **store_config**: persistence engine (`memory` or `redis`) and its address
//! - **whitelist**: approved client peer id prefixes
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", true)?;
//! Configuration::save_from_config("config.toml", &config)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
