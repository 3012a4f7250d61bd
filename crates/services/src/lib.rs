#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod model_card_service;
pub mod progress_service;

pub use academy_core::Clock;

pub use app_services::AppServices;
pub use catalog_service::{CatalogService, CatalogView, LessonEntry, ModuleSection};
pub use config::{AppConfig, ClassifierConfig};
pub use error::{
    AppServicesError, ClassifierError, EvaluationError, ModelCardError, ProgressServiceError,
};
pub use evaluation::{
    EvaluationReport, EvaluationService, EvaluationSummary, HttpClassifier, Prediction, Predictor,
    SequenceClassifier,
};
pub use model_card_service::ModelCardService;
pub use progress_service::ProgressService;
