use std::sync::Arc;

use academy_core::catalog::Catalog;
use storage::repository::Storage;

use crate::Clock;
use crate::catalog_service::CatalogService;
use crate::config::AppConfig;
use crate::error::AppServicesError;
use crate::evaluation::{EvaluationService, HttpClassifier, Predictor};
use crate::model_card_service::ModelCardService;
use crate::progress_service::ProgressService;

/// Assembles app-facing services around one catalog and one progress store.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    progress: Arc<ProgressService>,
    evaluation: Arc<EvaluationService>,
    model_cards: Arc<ModelCardService>,
    predictor: Option<Arc<Predictor>>,
}

impl AppServices {
    /// Build services backed by the JSON progress file named in `config`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the catalog is inconsistent or the
    /// progress file exists but cannot be read.
    pub async fn from_config(config: &AppConfig, clock: Clock) -> Result<Self, AppServicesError> {
        tracing::info!(path = %config.progress_path.display(), "using progress file");
        let storage = Storage::json(&config.progress_path);
        let mut services = Self::with_storage(storage, clock).await?;
        services.evaluation = Arc::new(EvaluationService::new(config.report_path.clone()));
        if config.classifier.is_some() {
            let classifier = HttpClassifier::new(config.classifier.clone());
            services.predictor = Some(Arc::new(Predictor::new(Arc::new(classifier))));
        }
        Ok(services)
    }

    /// Build services over an in-memory store, for tests and previews.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the catalog is inconsistent.
    pub async fn in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        Self::with_storage(Storage::in_memory(), clock).await
    }

    /// Build services over an arbitrary storage backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the catalog is inconsistent or progress
    /// cannot be loaded.
    pub async fn with_storage(storage: Storage, clock: Clock) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(Catalog::builtin()?);
        let progress = Arc::new(
            ProgressService::load(Arc::clone(&catalog), Arc::clone(&storage.progress)).await?,
        );
        Ok(Self {
            catalog: Arc::new(CatalogService::new(catalog)),
            progress,
            evaluation: Arc::new(EvaluationService::default()),
            model_cards: Arc::new(ModelCardService::new(clock)),
            predictor: None,
        })
    }

    #[must_use]
    pub fn with_evaluation(mut self, evaluation: EvaluationService) -> Self {
        self.evaluation = Arc::new(evaluation);
        self
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn evaluation(&self) -> Arc<EvaluationService> {
        Arc::clone(&self.evaluation)
    }

    #[must_use]
    pub fn model_cards(&self) -> Arc<ModelCardService> {
        Arc::clone(&self.model_cards)
    }

    /// Present only when a classifier endpoint is configured.
    #[must_use]
    pub fn predictor(&self) -> Option<Arc<Predictor>> {
        self.predictor.clone()
    }
}
