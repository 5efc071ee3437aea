//! Configuration enumerations.

/// Errors raised while loading, saving or validating the configuration.
pub mod configuration_error;

/// Handling of scrapes without info hashes.
pub mod empty_scrape_policy;
