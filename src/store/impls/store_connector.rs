use async_trait::async_trait;
use log::info;
use crate::config::structs::store_config::StoreConfig;
use crate::store::enums::store_engine::StoreEngine;
use crate::store::errors::StoreError;
use crate::store::structs::peer_patch::PeerPatch;
use crate::store::structs::store_connector::StoreConnector;
use crate::store::structs::store_connector_memory::StoreConnectorMemory;
use crate::store::structs::store_connector_redis::StoreConnectorRedis;
use crate::store::structs::torrent_record::TorrentRecord;
use crate::store::traits::peer_store::PeerStore;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer::Peer;

impl StoreConnector {
    pub async fn new(config: &StoreConfig) -> Result<StoreConnector, StoreError> {
        match config.engine {
            StoreEngine::memory => {
                info!("[Store] Using in-memory store");
                Ok(StoreConnector {
                    memory: Some(StoreConnectorMemory::new()),
                    redis: None,
                    engine: StoreEngine::memory,
                })
            }
            StoreEngine::redis => {
                let connection_url = format!("{}{}", config.engine.url_scheme(), config.address);
                let redis_connector = StoreConnectorRedis::connect(&connection_url, &config.prefix).await?;
                info!("[Store] Connected to Redis at {}", config.address);
                Ok(StoreConnector {
                    memory: None,
                    redis: Some(redis_connector),
                    engine: StoreEngine::redis,
                })
            }
        }
    }

    pub fn engine(&self) -> StoreEngine {
        self.engine
    }

    pub fn backend(&self) -> Result<&dyn PeerStore, StoreError> {
        match self.engine {
            StoreEngine::memory => self.memory.as_ref()
                .map(|m| m as &dyn PeerStore)
                .ok_or_else(|| StoreError::ConnectionError("Memory store not initialized".to_string())),
            StoreEngine::redis => self.redis.as_ref()
                .map(|r| r as &dyn PeerStore)
                .ok_or_else(|| StoreError::ConnectionError("Redis not connected".to_string())),
        }
    }
}

#[async_trait]
impl PeerStore for StoreConnector {
    async fn ping(&self) -> Result<(), StoreError> {
        self.backend()?.ping().await
    }

    async fn get_torrent(&self, info_hash: &InfoHash) -> Result<Option<TorrentRecord>, StoreError> {
        self.backend()?.get_torrent(info_hash).await
    }

    async fn get_peers(&self, info_hash: &InfoHash, limit: usize) -> Result<Vec<Peer>, StoreError> {
        self.backend()?.get_peers(info_hash, limit).await
    }

    async fn sync_peer(&self, patch: &PeerPatch) -> Result<(), StoreError> {
        self.backend()?.sync_peer(patch).await
    }

    async fn add_hit_and_run(&self, user_id: u64, torrent_id: u64) -> Result<(), StoreError> {
        self.backend()?.add_hit_and_run(user_id, torrent_id).await
    }
}
