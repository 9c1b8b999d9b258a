//! Local key-value storage
//!
//! The task list persists through a tiny get/set interface, the same shape as
//! browser local storage. Two implementations exist:
//! - [`SqliteStore`]: SeaORM over a SQLite file, the default
//! - [`MemoryStore`]: a map in memory, nothing survives the process

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::{StorageConfig, STORAGE_BACKEND_MEMORY, STORAGE_BACKEND_SQLITE};

/// String key to string value storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Open the store selected by the configuration.
pub async fn open(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
    match config.backend.as_str() {
        STORAGE_BACKEND_SQLITE => {
            let path = config.resolve_database_path()?;
            log::info!("Opening SQLite store at {}", path.display());
            Ok(Arc::new(SqliteStore::open(&path).await?))
        }
        STORAGE_BACKEND_MEMORY => {
            log::info!("Using in-memory store, tasks will not be kept after exit");
            Ok(Arc::new(MemoryStore::new()))
        }
        other => anyhow::bail!("unsupported storage backend '{}'", other),
    }
}
