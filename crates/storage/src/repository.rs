use academy_core::model::ProgressMap;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::json::JsonProgressRepository;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Repository contract for the learner's progress map.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Read the whole progress map. An absent store yields an empty map.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store exists but cannot be read or parsed.
    async fn load_progress(&self) -> Result<ProgressMap, StorageError>;

    /// Replace the persisted progress map with `progress`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the map cannot be written.
    async fn save_progress(&self, progress: &ProgressMap) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    progress: Arc<Mutex<ProgressMap>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            progress: Arc::new(Mutex::new(ProgressMap::new())),
        }
    }

    /// Seed the repository with an existing map.
    #[must_use]
    pub fn with_progress(progress: ProgressMap) -> Self {
        Self {
            progress: Arc::new(Mutex::new(progress)),
        }
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load_progress(&self) -> Result<ProgressMap, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_progress(&self, progress: &ProgressMap) -> Result<(), StorageError> {
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = progress.clone();
        Ok(())
    }
}

/// Progress repository behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let progress: Arc<dyn ProgressRepository> = Arc::new(InMemoryRepository::new());
        Self { progress }
    }

    /// Build a `Storage` backed by a JSON file at `path`.
    ///
    /// Nothing is touched on disk until the first load or save.
    #[must_use]
    pub fn json(path: impl Into<PathBuf>) -> Self {
        let progress: Arc<dyn ProgressRepository> =
            Arc::new(JsonProgressRepository::new(path));
        Self { progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::model::{LessonId, LessonStatus};

    #[tokio::test]
    async fn in_memory_roundtrip() {
        let storage = Storage::in_memory();
        assert!(storage.progress.load_progress().await.unwrap().is_empty());

        let mut map = ProgressMap::new();
        map.mark_complete(LessonId::new("m1l1").unwrap());
        storage.progress.save_progress(&map).await.unwrap();

        let loaded = storage.progress.load_progress().await.unwrap();
        assert_eq!(
            loaded.status_of(&LessonId::new("m1l1").unwrap()),
            LessonStatus::Completed
        );
    }

    #[tokio::test]
    async fn save_replaces_previous_map() {
        let mut first = ProgressMap::new();
        first.mark_complete(LessonId::new("m1l1").unwrap());
        let repo = InMemoryRepository::with_progress(first);

        repo.save_progress(&ProgressMap::new()).await.unwrap();
        assert!(repo.load_progress().await.unwrap().is_empty());
    }
}
