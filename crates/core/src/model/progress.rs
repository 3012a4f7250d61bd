use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::ids::LessonId;
use crate::model::lesson::LessonStatus;

/// Persisted completion state keyed by lesson identifier.
///
/// Lessons absent from the map are `not_started`. Serializes as a flat JSON
/// object (`{"m1l1": "completed"}`) ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressMap(BTreeMap<LessonId, LessonStatus>);

impl ProgressMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status recorded for `id`, or `NotStarted` if absent.
    #[must_use]
    pub fn status_of(&self, id: &LessonId) -> LessonStatus {
        self.0.get(id).copied().unwrap_or_default()
    }

    /// Record `status` for `id`, returning the previous entry.
    pub fn set(&mut self, id: LessonId, status: LessonStatus) -> Option<LessonStatus> {
        self.0.insert(id, status)
    }

    /// Mark a lesson completed. Returns `true` if the map changed.
    pub fn mark_complete(&mut self, id: LessonId) -> bool {
        self.set(id, LessonStatus::Completed) != Some(LessonStatus::Completed)
    }

    /// Mark a lesson in progress unless it is already completed.
    /// Returns `true` if the map changed.
    pub fn mark_started(&mut self, id: LessonId) -> bool {
        match self.status_of(&id) {
            LessonStatus::NotStarted => {
                self.set(id, LessonStatus::InProgress);
                true
            }
            LessonStatus::InProgress | LessonStatus::Completed => false,
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LessonId, LessonStatus)> {
        self.0.iter().map(|(id, status)| (id, *status))
    }

    /// Aggregate counts over the given lesson ids.
    ///
    /// Only ids yielded by `lessons` are counted, so stale keys left in the
    /// file by older curricula do not inflate the totals.
    pub fn summarize<'a>(&self, lessons: impl IntoIterator<Item = &'a LessonId>) -> ProgressSummary {
        let mut summary = ProgressSummary::default();
        for id in lessons {
            summary.total += 1;
            match self.status_of(id) {
                LessonStatus::Completed => summary.completed += 1,
                LessonStatus::InProgress => summary.in_progress += 1,
                LessonStatus::NotStarted => {}
            }
        }
        summary
    }
}

impl FromIterator<(LessonId, LessonStatus)> for ProgressMap {
    fn from_iter<T: IntoIterator<Item = (LessonId, LessonStatus)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Aggregated completion counts, useful for UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub in_progress: usize,
    pub total: usize,
}

impl ProgressSummary {
    #[must_use]
    pub fn not_started(&self) -> usize {
        self.total.saturating_sub(self.completed + self.in_progress)
    }

    /// Completed lessons as a percentage of all lessons (0 when empty).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent_complete(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }
}
