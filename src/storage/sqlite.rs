use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::{ActiveValue, ConnectionTrait, DatabaseConnection, EntityTrait, Schema, SqlxSqliteConnector};

use super::KeyValueStore;
use crate::entities::{kv_entry, KvEntry};

/// Key-value store kept in a single SQLite table.
pub struct SqliteStore {
    conn: DatabaseConnection,
}

impl SqliteStore {
    /// Open (and create if needed) the database file at `path`.
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }

        // The path is handed over as-is, never parsed as a URL
        let options = SqliteConnectOptions::new().filename(path).create_if_missing(true);
        Self::connect(options, &path.display().to_string()).await
    }

    /// Database living only as long as this store.
    pub async fn in_memory() -> Result<Self> {
        let options: SqliteConnectOptions = "sqlite::memory:"
            .parse()
            .context("Invalid in-memory database options")?;
        Self::connect(options, ":memory:").await
    }

    async fn connect(options: SqliteConnectOptions, name: &str) -> Result<Self> {
        // An in-memory database is private to its connection, so the pool holds exactly one.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open database: {}", name))?;

        let store = Self {
            conn: SqlxSqliteConnector::from_sqlx_sqlite_pool(pool),
        };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);
        let mut create = schema.create_table_from_entity(KvEntry);
        create.if_not_exists();

        self.conn
            .execute(backend.build(&create))
            .await
            .context("Failed to create kv_store table")?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entry = KvEntry::find_by_id(key.to_string())
            .one(&self.conn)
            .await
            .with_context(|| format!("Failed to read key '{}'", key))?;
        Ok(entry.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let entry = kv_entry::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
        };

        KvEntry::insert(entry)
            .on_conflict(
                OnConflict::column(kv_entry::Column::Key)
                    .update_column(kv_entry::Column::Value)
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .with_context(|| format!("Failed to write key '{}'", key))?;
        Ok(())
    }
}
