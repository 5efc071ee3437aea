use log::debug;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

/// Whether any prefix is a literal, case-sensitive prefix of the peer id.
///
/// ```rust
/// use swarm_tracker::tracker::impls::torrent_tracker_whitelist::is_valid_client;
/// use swarm_tracker::tracker::structs::peer_id::PeerId;
///
/// let mut id = [b'0'; 20];
/// id[..8].copy_from_slice(b"-TR2940-");
/// assert!(is_valid_client(&PeerId(id), &[String::from("-TR")]));
/// assert!(!is_valid_client(&PeerId(id), &[String::from("-tr")]));
/// ```
pub fn is_valid_client(peer_id: &PeerId, prefixes: &[String]) -> bool
{
    prefixes.iter().any(|prefix| peer_id.starts_with(prefix.as_bytes()))
}

impl TorrentTracker {
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn add_whitelist(&self, prefix: &str) -> bool
    {
        if prefix.is_empty() {
            return false;
        }
        let mut lock = self.whitelist.write();
        if lock.iter().any(|entry| entry == prefix) {
            return false;
        }
        lock.push(prefix.to_string());
        true
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove_whitelist(&self, prefix: &str) -> bool
    {
        let mut lock = self.whitelist.write();
        let before = lock.len();
        lock.retain(|entry| entry != prefix);
        lock.len() != before
    }

    pub fn get_whitelist(&self) -> Vec<String>
    {
        self.whitelist.read().clone()
    }

    pub fn clear_whitelist(&self)
    {
        self.whitelist.write().clear();
    }

    #[inline]
    pub fn check_whitelist(&self, peer_id: &PeerId) -> bool
    {
        let allowed = is_valid_client(peer_id, &self.whitelist.read());
        if !allowed {
            debug!("[WHITELIST] Rejected client {}", peer_id.client_signature().unwrap_or("unknown"));
        }
        allowed
    }
}
