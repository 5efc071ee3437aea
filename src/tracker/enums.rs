//! Enumerations for tracker operations.

/// Announce event (started, stopped, completed, none).
pub mod announce_event;

/// Errors that end an announce or scrape.
pub mod tracker_error;
