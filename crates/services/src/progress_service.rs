use std::sync::{Arc, PoisonError, RwLock};

use academy_core::catalog::Catalog;
use academy_core::model::{LessonId, LessonStatus, ProgressMap, ProgressSummary};
use storage::repository::ProgressRepository;
use tokio::sync::Mutex;

use crate::error::ProgressServiceError;

/// Session object owning the learner's progress map.
///
/// Reads are synchronous snapshots so views can render without awaiting.
/// Mutations are serialized and persisted before the in-memory map is
/// updated, so a failed save leaves the visible state unchanged.
pub struct ProgressService {
    catalog: Arc<Catalog>,
    repo: Arc<dyn ProgressRepository>,
    state: RwLock<ProgressMap>,
    writes: Mutex<()>,
}

impl ProgressService {
    /// Load the persisted map and build the service around it.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the store cannot be read.
    pub async fn load(
        catalog: Arc<Catalog>,
        repo: Arc<dyn ProgressRepository>,
    ) -> Result<Self, ProgressServiceError> {
        let map = repo.load_progress().await?;
        tracing::info!(entries = map.len(), "progress loaded");
        Ok(Self {
            catalog,
            repo,
            state: RwLock::new(map),
            writes: Mutex::new(()),
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressMap {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn status_of(&self, id: &LessonId) -> LessonStatus {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .status_of(id)
    }

    /// Completion counts over the catalog's lessons.
    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .summarize(self.catalog.lesson_ids())
    }

    /// Mark a lesson completed and persist.
    ///
    /// Returns `true` if the status changed.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::UnknownLesson` for ids outside the
    /// catalog, or `Storage` if the save fails.
    pub async fn mark_complete(&self, id: &LessonId) -> Result<bool, ProgressServiceError> {
        self.update(id, |map| map.mark_complete(id.clone())).await
    }

    /// Mark a lesson in progress (never downgrading a completed one) and
    /// persist.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::UnknownLesson` for ids outside the
    /// catalog, or `Storage` if the save fails.
    pub async fn mark_started(&self, id: &LessonId) -> Result<bool, ProgressServiceError> {
        self.update(id, |map| map.mark_started(id.clone())).await
    }

    /// Forget all progress and persist the empty map.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the save fails.
    pub async fn reset(&self) -> Result<(), ProgressServiceError> {
        let _guard = self.writes.lock().await;
        let empty = ProgressMap::new();
        self.repo.save_progress(&empty).await?;
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = empty;
        tracing::info!("progress reset");
        Ok(())
    }

    async fn update(
        &self,
        id: &LessonId,
        apply: impl FnOnce(&mut ProgressMap) -> bool,
    ) -> Result<bool, ProgressServiceError> {
        if !self.catalog.contains(id) {
            return Err(ProgressServiceError::UnknownLesson(id.clone()));
        }

        let _guard = self.writes.lock().await;
        let mut next = self.snapshot();
        if !apply(&mut next) {
            return Ok(false);
        }

        self.repo.save_progress(&next).await?;
        let status = next.status_of(id);
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = next;
        tracing::info!(lesson = %id, %status, "lesson status updated");
        Ok(true)
    }
}
