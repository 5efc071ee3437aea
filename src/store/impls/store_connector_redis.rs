use std::collections::HashMap;
use async_trait::async_trait;
use log::{debug, warn};
use crate::store::errors::StoreError;
use crate::store::structs::peer_patch::PeerPatch;
use crate::store::structs::store_connector_redis::StoreConnectorRedis;
use crate::store::structs::torrent_record::TorrentRecord;
use crate::store::traits::peer_store::PeerStore;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_id::PeerId;

impl StoreConnectorRedis {
    pub async fn connect(url: &str, prefix: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(url)
            .map_err(|e| StoreError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| StoreError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        Ok(Self {
            connection,
            prefix: prefix.to_string(),
        })
    }

    pub(crate) fn torrent_key(&self, info_hash: &InfoHash) -> String {
        format!("{}t:t:{}", self.prefix, info_hash)
    }

    pub(crate) fn torrent_peers_key(&self, info_hash: &InfoHash) -> String {
        format!("{}t:tpeers:{}", self.prefix, info_hash)
    }

    pub(crate) fn peer_key(&self, info_hash: &InfoHash, peer_id: &PeerId) -> String {
        format!("{}t:p:{}:{}", self.prefix, info_hash, peer_id)
    }

    pub(crate) fn hit_and_run_key(&self, user_id: u64) -> String {
        format!("{}t:u:hnr:{}", self.prefix, user_id)
    }
}

#[async_trait]
impl PeerStore for StoreConnectorRedis {
    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(StoreError::RedisError)?;
        Ok(())
    }

    async fn get_torrent(&self, info_hash: &InfoHash) -> Result<Option<TorrentRecord>, StoreError> {
        let mut conn = self.connection.clone();
        let (torrent_id, completed): (Option<u64>, Option<u64>) = redis::cmd("HMGET")
            .arg(self.torrent_key(info_hash))
            .arg("torrent_id")
            .arg("completed")
            .query_async(&mut conn)
            .await
            .map_err(StoreError::RedisError)?;

        Ok(torrent_id.map(|torrent_id| TorrentRecord {
            info_hash: *info_hash,
            torrent_id,
            completed: completed.unwrap_or(0),
        }))
    }

    async fn get_peers(&self, info_hash: &InfoHash, limit: usize) -> Result<Vec<Peer>, StoreError> {
        let mut conn = self.connection.clone();
        let members: Vec<String> = redis::cmd("SMEMBERS")
            .arg(self.torrent_peers_key(info_hash))
            .query_async(&mut conn)
            .await
            .map_err(StoreError::RedisError)?;

        let mut peers = Vec::with_capacity(limit.min(members.len()));
        for member in members.iter().take(limit) {
            let Ok(peer_id) = member.parse::<PeerId>() else {
                warn!("[Redis] Skipping malformed peer id {} on {}", member, info_hash);
                continue;
            };
            let fields: HashMap<String, String> = redis::cmd("HGETALL")
                .arg(self.peer_key(info_hash, &peer_id))
                .query_async(&mut conn)
                .await
                .map_err(StoreError::RedisError)?;
            if fields.is_empty() {
                continue;
            }
            match PeerPatch::from_fields(*info_hash, &fields) {
                Ok(patch) => peers.push(Peer::from(patch)),
                Err(error) => warn!("[Redis] Skipping peer {} on {}: {}", peer_id, info_hash, error),
            }
        }
        Ok(peers)
    }

    async fn sync_peer(&self, patch: &PeerPatch) -> Result<(), StoreError> {
        let mut conn = self.connection.clone();
        let mut pipe = redis::pipe();
        let fields = patch.fields();
        pipe.hset_multiple(self.peer_key(&patch.info_hash, &patch.peer_id), fields.as_slice());
        pipe.sadd(self.torrent_peers_key(&patch.info_hash), patch.peer_id.to_string());
        pipe.query_async::<()>(&mut conn)
            .await
            .map_err(StoreError::RedisError)?;
        debug!("[Redis] Synced peer {} on {}", patch.peer_id, patch.info_hash);
        Ok(())
    }

    async fn add_hit_and_run(&self, user_id: u64, torrent_id: u64) -> Result<(), StoreError> {
        let mut conn = self.connection.clone();
        redis::cmd("SADD")
            .arg(self.hit_and_run_key(user_id))
            .arg(torrent_id)
            .query_async::<()>(&mut conn)
            .await
            .map_err(StoreError::RedisError)?;
        debug!("[Redis] Added hit-and-run torrent {} for user {}", torrent_id, user_id);
        Ok(())
    }
}
