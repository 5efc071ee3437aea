use crate::store::enums::store_engine::StoreEngine;
use crate::store::structs::store_connector_memory::StoreConnectorMemory;
use crate::store::structs::store_connector_redis::StoreConnectorRedis;

/// The configured store, dispatching to the selected engine.
#[derive(Debug)]
pub struct StoreConnector {
    pub(crate) memory: Option<StoreConnectorMemory>,
    pub(crate) redis: Option<StoreConnectorRedis>,
    pub(crate) engine: StoreEngine,
}
