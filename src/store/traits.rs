//! Store backend trait definitions.

/// The persistence contract.
pub mod peer_store;
