use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Operation error: {0}")]
    OperationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Sync queue closed")]
    QueueClosed,

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),
}
