use serde::{Deserialize, Serialize};

/// Event reported by a client in an announce request.
///
/// The numeric values follow the UDP tracker protocol (BEP 15) so the same
/// enum can be shared by both transports. A missing or empty `event`
/// parameter is a regular interval announce, `None`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum AnnounceEvent {
    #[default]
    None = 0,
    Completed = 1,
    Started = 2,
    Stopped = 3
}
