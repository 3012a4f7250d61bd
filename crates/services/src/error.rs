//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use academy_core::catalog::CatalogError;
use academy_core::eval::MetricsError;
use academy_core::model::LessonId;
use storage::repository::StorageError;

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error("unknown lesson: {0}")]
    UnknownLesson(LessonId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by a `SequenceClassifier`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClassifierError {
    #[error("classifier endpoint is not configured")]
    Disabled,
    #[error("classifier returned an empty response")]
    EmptyResponse,
    #[error("classifier request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("classifier returned {actual} rows for {expected} inputs")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("classifier returned unknown label {0:?}")]
    UnknownLabel(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `Predictor` and `EvaluationService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvaluationError {
    #[error("batch size must be greater than zero")]
    InvalidBatchSize,
    #[error("no evaluation report is configured")]
    NoReport,
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Errors emitted by `ModelCardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelCardError {
    #[error("model name must not be empty")]
    EmptyModelName,
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Progress(#[from] ProgressServiceError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
