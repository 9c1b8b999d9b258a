//! Task repository: the task collection stored as one JSON document.

use crate::constants::TASKS_STORAGE_KEY;
use crate::storage::KeyValueStore;
use crate::todo::Task;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
    #[error("Stored task list is malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("Failed to encode task list: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Reads and writes the whole task collection under the `tasks` key.
pub struct TaskRepository;

impl TaskRepository {
    /// Parse a stored payload into tasks, keeping their order.
    pub fn decode(raw: &str) -> Result<Vec<Task>, RepositoryError> {
        serde_json::from_str(raw).map_err(RepositoryError::Malformed)
    }

    pub fn encode(tasks: &[Task]) -> Result<String, RepositoryError> {
        serde_json::to_string(tasks).map_err(RepositoryError::Encode)
    }

    /// Load the stored collection. A missing key yields an empty collection.
    pub async fn load(store: &dyn KeyValueStore) -> Result<Vec<Task>, RepositoryError> {
        match store.get(TASKS_STORAGE_KEY).await? {
            Some(raw) => Self::decode(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Like [`TaskRepository::load`], but a malformed payload is logged and
    /// treated as an empty collection. Storage failures are still returned.
    pub async fn load_or_default(store: &dyn KeyValueStore) -> Result<Vec<Task>, RepositoryError> {
        match Self::load(store).await {
            Ok(tasks) => {
                log::info!("Loaded {} tasks from storage", tasks.len());
                Ok(tasks)
            }
            Err(RepositoryError::Malformed(e)) => {
                log::warn!("Ignoring malformed '{}' entry, starting empty: {}", TASKS_STORAGE_KEY, e);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Replace the stored collection with `tasks`.
    pub async fn save(store: &dyn KeyValueStore, tasks: &[Task]) -> Result<(), RepositoryError> {
        let payload = Self::encode(tasks)?;
        store.set(TASKS_STORAGE_KEY, &payload).await?;
        log::debug!("Saved {} tasks", tasks.len());
        Ok(())
    }
}
