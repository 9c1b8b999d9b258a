use tasklist::config::{StorageConfig, STORAGE_BACKEND_MEMORY};
use tasklist::storage::{self, KeyValueStore, MemoryStore, SqliteStore};

async fn exercise_store(store: &dyn KeyValueStore) {
    assert_eq!(store.get("tasks").await.unwrap(), None);

    store.set("tasks", "[]").await.unwrap();
    assert_eq!(store.get("tasks").await.unwrap().as_deref(), Some("[]"));

    store.set("tasks", "[1]").await.unwrap();
    assert_eq!(store.get("tasks").await.unwrap().as_deref(), Some("[1]"));

    // Keys are independent
    store.set("other", "x").await.unwrap();
    assert_eq!(store.get("tasks").await.unwrap().as_deref(), Some("[1]"));
    assert_eq!(store.get("other").await.unwrap().as_deref(), Some("x"));
}

#[tokio::test]
async fn test_memory_store() {
    let store = MemoryStore::new();
    exercise_store(&store).await;
    assert_eq!(store.write_count(), 3);
}

#[tokio::test]
async fn test_sqlite_store_in_memory() {
    let store = SqliteStore::in_memory().await.unwrap();
    exercise_store(&store).await;
}

#[tokio::test]
async fn test_sqlite_store_persists_across_reopen() {
    let dir = std::env::temp_dir().join(format!("tasklist_test_store_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("nested").join("storage.db");

    {
        let store = SqliteStore::open(&path).await.unwrap();
        store.set("tasks", "[\"kept\"]").await.unwrap();
    }

    let reopened = SqliteStore::open(&path).await.unwrap();
    assert_eq!(reopened.get("tasks").await.unwrap().as_deref(), Some("[\"kept\"]"));

    drop(reopened);
    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_sqlite_store_path_with_url_characters() {
    let dir = std::env::temp_dir().join(format!("tasklist_test_url_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("odd?name#dir%20x").join("storage.db");

    {
        let store = SqliteStore::open(&path).await.unwrap();
        store.set("tasks", "[]").await.unwrap();
    }

    // The file lands at the literal path, not a decoded or truncated one
    assert!(path.is_file());
    let reopened = SqliteStore::open(&path).await.unwrap();
    assert_eq!(reopened.get("tasks").await.unwrap().as_deref(), Some("[]"));

    drop(reopened);
    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_open_memory_backend_from_config() {
    let config = StorageConfig {
        backend: STORAGE_BACKEND_MEMORY.to_string(),
        database_path: None,
    };
    let store = storage::open(&config).await.unwrap();
    exercise_store(store.as_ref()).await;
}

#[tokio::test]
async fn test_open_unknown_backend_fails() {
    let config = StorageConfig {
        backend: "cloud".to_string(),
        database_path: None,
    };
    assert!(storage::open(&config).await.is_err());
}
