use serde::Serialize;

/// Bytes credited by a single announce, after restart detection.
#[derive(Serialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct TransferDelta {
    pub uploaded: u64,
    pub downloaded: u64,
}
