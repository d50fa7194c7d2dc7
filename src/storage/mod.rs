use crate::error::Result;
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod gateway;
pub mod memory_storage;

#[cfg(feature = "sqlite-storage")]
pub mod sqlite_storage;

pub use gateway::PersistenceGateway;

/// Durable key-value text store the board is persisted into
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads the value under `key`, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`; deleting an absent key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}
