//! Request-level error taxonomy.

use thiserror::Error;

/// Errors that end an announce or scrape request.
///
/// Every variant maps onto a bencoded `failure reason`. The messages are
/// deliberately generic where detail would leak policy, e.g. the whitelist
/// contents are never echoed back to a rejected client.
///
/// Persistence failures are not part of this enum: they are handled in the
/// background sync worker (see [`crate::store::errors::StoreError`]) and
/// never reach the requesting client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Unparseable query, missing or invalid field, empty info hash set.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// Announce for an info hash that is not registered.
    #[error("unregistered torrent")]
    UnknownTorrent,

    /// Peer id does not match any approved client prefix.
    #[error("client not allowed")]
    UnauthorizedClient,

    /// Response serialization failed.
    #[error("internal error: {0}")]
    EncodingFailure(String),
}
