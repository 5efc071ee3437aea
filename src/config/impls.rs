//! Configuration implementation blocks.

/// Loading, saving and validation.
pub mod configuration;

/// Display for configuration errors.
pub mod configuration_error;

/// Derived tracker settings.
pub mod tracker_config;
