//! Result store selection.

use std::sync::Arc;

use protolab_core::StorageBackend;
use protolab_core::config::StorageConfig;
use protolab_db::{DbError, DragonflyPool, FileResultStore, KvResultStore, MemoryResultStore, ResultStore};
use tracing::info;

/// Open the backend named by `config`.
///
/// The file backend is lazy and never fails here; Dragonfly connects
/// eagerly so a bad URL stops startup.
pub async fn open_store(config: &StorageConfig) -> Result<Arc<dyn ResultStore>, DbError> {
    let store: Arc<dyn ResultStore> = match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory result store");
            Arc::new(MemoryResultStore::new())
        }
        StorageBackend::File => {
            info!(path = %config.results_file.display(), "Using file result store");
            Arc::new(FileResultStore::new(config.results_file.clone()))
        }
        StorageBackend::Dragonfly => {
            info!(url = %config.dragonfly_url, key = %config.results_key, "Connecting to Dragonfly");
            let pool = DragonflyPool::connect(&config.dragonfly_url).await?;
            Arc::new(KvResultStore::new(pool, config.results_key.clone()))
        }
    };
    Ok(store)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use protolab_types::ResultRecord;

    use super::*;

    #[tokio::test]
    async fn memory_backend_starts_empty() {
        let config = StorageConfig { backend: StorageBackend::Memory, ..StorageConfig::default() };
        let store = open_store(&config).await.unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn file_backend_writes_to_configured_path() {
        let path = std::env::temp_dir().join(format!("protolab-engine-{}.json", uuid::Uuid::now_v7()));
        let config = StorageConfig { backend: StorageBackend::File, results_file: path.clone(), ..StorageConfig::default() };
        let store = open_store(&config).await.unwrap();

        let outcome = store.append_if_new(ResultRecord::new("10.0.0.1", "Clippy", "WTSAD".parse().unwrap())).await.unwrap();

        assert!(outcome.accepted);
        assert!(path.exists());
        std::fs::remove_file(path).unwrap();
    }
}
