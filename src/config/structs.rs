//! Configuration data structures.

/// Root configuration.
pub mod configuration;

/// Persistence settings.
pub mod store_config;

/// Announce, scrape and policy settings.
pub mod tracker_config;
