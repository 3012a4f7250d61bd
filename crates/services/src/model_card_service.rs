use std::path::{Path, PathBuf};

use academy_core::eval::{EvaluationResult, ModelCard};

use crate::Clock;
use crate::error::ModelCardError;

pub const MODEL_CARD_FILE: &str = "README.md";

/// Writes model cards next to saved model weights.
#[derive(Clone)]
pub struct ModelCardService {
    clock: Clock,
}

impl ModelCardService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Build the card for a model saved under `save_dir`.
    ///
    /// # Errors
    ///
    /// Returns `ModelCardError::EmptyModelName` if `model_name` is blank.
    pub fn card(
        &self,
        model_name: &str,
        task: &str,
        metrics: EvaluationResult,
        save_dir: &Path,
    ) -> Result<ModelCard, ModelCardError> {
        let model_name = model_name.trim();
        if model_name.is_empty() {
            return Err(ModelCardError::EmptyModelName);
        }
        Ok(ModelCard {
            model_name: model_name.to_owned(),
            task: task.trim().to_owned(),
            metrics,
            save_path: save_dir.display().to_string(),
            generated_on: self.clock.today(),
        })
    }

    /// Render the card and write it to `<save_dir>/README.md`, creating the
    /// directory if needed. Returns the written path.
    ///
    /// # Errors
    ///
    /// Returns `ModelCardError` if the name is blank or the file cannot be
    /// written.
    pub async fn write(
        &self,
        model_name: &str,
        task: &str,
        metrics: EvaluationResult,
        save_dir: &Path,
    ) -> Result<PathBuf, ModelCardError> {
        let card = self.card(model_name, task, metrics, save_dir)?;
        let path = save_dir.join(MODEL_CARD_FILE);
        let io_err = |source| ModelCardError::Io {
            path: path.clone(),
            source,
        };

        tokio::fs::create_dir_all(save_dir).await.map_err(io_err)?;
        tokio::fs::write(&path, card.render())
            .await
            .map_err(io_err)?;
        tracing::info!(path = %path.display(), "model card saved");
        Ok(path)
    }
}
