//! JSON-file progress backend.
//!
//! The file is a flat object of lesson id to status string, pretty-printed
//! with two-space indentation. Saves go through a sibling temp file and a
//! rename so an interrupted write never truncates the previous file.

use academy_core::model::{LessonId, LessonStatus, ProgressMap};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::repository::{ProgressRepository, StorageError};

/// Relative location used when no path is configured.
pub const DEFAULT_PROGRESS_PATH: &str = "webapp/progress.json";

#[derive(Debug, Clone)]
pub struct JsonProgressRepository {
    path: PathBuf,
}

impl JsonProgressRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map_or_else(|| "progress".into(), |n| n.to_string_lossy().into_owned());
        self.path
            .with_file_name(format!(".{name}.{}.tmp", Uuid::new_v4()))
    }
}

impl Default for JsonProgressRepository {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRESS_PATH)
    }
}

/// Decode the on-disk object, coercing unknown statuses to `NotStarted`.
///
/// Keys are trimmed, so `" m1l1"` and `"m1l1"` name the same lesson. On such
/// a collision the exactly spelled key wins; among padded variants the first
/// in key order wins.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if `raw` is not a JSON object of
/// strings.
pub fn decode_progress(raw: &str) -> Result<ProgressMap, StorageError> {
    let entries: BTreeMap<String, String> = serde_json::from_str(raw)?;
    let mut decoded: BTreeMap<LessonId, (LessonStatus, bool)> = BTreeMap::new();
    for (key, value) in entries {
        let exact = key.trim() == key;
        let Ok(id) = LessonId::new(key) else {
            tracing::warn!("skipping progress entry with an empty lesson id");
            continue;
        };
        if let Some(&(_, kept_exact)) = decoded.get(&id) {
            tracing::warn!(lesson = %id, "duplicate progress entry after trimming");
            if kept_exact || !exact {
                continue;
            }
        }
        let status = value.parse::<LessonStatus>().unwrap_or_else(|err| {
            tracing::warn!(lesson = %id, %err, "unknown status, treating as not_started");
            LessonStatus::NotStarted
        });
        decoded.insert(id, (status, exact));
    }

    let mut map = ProgressMap::new();
    for (id, (status, _)) in decoded {
        map.set(id, status);
    }
    Ok(map)
}

#[async_trait]
impl ProgressRepository for JsonProgressRepository {
    async fn load_progress(&self) -> Result<ProgressMap, StorageError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no progress file yet");
                return Ok(ProgressMap::new());
            }
            Err(err) => return Err(err.into()),
        };
        let map = decode_progress(&raw)?;
        tracing::debug!(path = %self.path.display(), entries = map.len(), "progress loaded");
        Ok(map)
    }

    async fn save_progress(&self, progress: &ProgressMap) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let body = serde_json::to_string_pretty(progress)?;
        let temp = self.temp_path();
        if let Err(err) = write_then_rename(&temp, &self.path, body.as_bytes()).await {
            // Best effort; the temp name is unique so a leftover is harmless.
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(err.into());
        }

        tracing::debug!(path = %self.path.display(), entries = progress.len(), "progress saved");
        Ok(())
    }
}

async fn write_then_rename(temp: &Path, target: &Path, body: &[u8]) -> std::io::Result<()> {
    tokio::fs::write(temp, body).await?;
    tokio::fs::rename(temp, target).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_coerces_unknown_status() {
        let map = decode_progress(r#"{"m1l1": "completed", "m1l2": "done"}"#).unwrap();
        assert_eq!(
            map.status_of(&LessonId::new("m1l1").unwrap()),
            LessonStatus::Completed
        );
        assert_eq!(
            map.status_of(&LessonId::new("m1l2").unwrap()),
            LessonStatus::NotStarted
        );
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn decode_skips_blank_ids() {
        let map = decode_progress(r#"{" ": "completed", "m1l1": "in_progress"}"#).unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn decode_prefers_exact_key_over_padded_duplicate() {
        let id = LessonId::new("m1l1").unwrap();

        // " m1l1" sorts before "m1l1" in the raw object.
        let map =
            decode_progress(r#"{" m1l1": "not_started", "m1l1": "completed"}"#).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.status_of(&id), LessonStatus::Completed);

        let map =
            decode_progress(r#"{"m1l1": "completed", "m1l1 ": "not_started"}"#).unwrap();
        assert_eq!(map.status_of(&id), LessonStatus::Completed);
    }

    #[test]
    fn decode_keeps_first_of_padded_duplicates() {
        let map =
            decode_progress(r#"{" m1l1": "in_progress", "m1l1 ": "completed"}"#).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.status_of(&LessonId::new("m1l1").unwrap()),
            LessonStatus::InProgress
        );
    }

    #[test]
    fn decode_rejects_non_objects() {
        assert!(matches!(
            decode_progress("[1, 2]"),
            Err(StorageError::Serialization(_))
        ));
        assert!(matches!(
            decode_progress(r#"{"m1l1": true}"#),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn temp_file_is_a_hidden_sibling() {
        let repo = JsonProgressRepository::new("webapp/progress.json");
        let temp = repo.temp_path();
        assert_eq!(temp.parent(), Some(Path::new("webapp")));
        let name = temp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".progress.json."));
        assert!(name.ends_with(".tmp"));
    }
}
