use std::path::{Path, PathBuf};
use std::sync::Arc;

use academy_core::eval::{
    ClassificationReport, ConfusionMatrix, DatasetInfo, EvaluationResult, Misclassified,
    ModelInfo, TrainingHistory, evaluate_labels, misclassified,
};

use crate::error::EvaluationError;

use super::report::EvaluationReport;

const MISCLASSIFIED_LIMIT: usize = 5;

/// Everything the dashboard and CLI show for one evaluation run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationSummary {
    pub result: EvaluationResult,
    pub confusion: ConfusionMatrix,
    pub report: ClassificationReport,
    pub misclassified: Vec<Misclassified>,
    pub history: TrainingHistory,
    /// One display name per confusion-matrix class.
    pub class_names: Vec<String>,
    /// Size and label balance of the evaluated split.
    pub dataset: DatasetInfo,
    pub model_info: Option<ModelInfo>,
}

#[derive(Clone, Default)]
enum ReportSource {
    #[default]
    None,
    File(PathBuf),
    Inline(Arc<EvaluationReport>),
}

/// Loads saved evaluation reports and derives their statistics.
#[derive(Clone, Default)]
pub struct EvaluationService {
    source: ReportSource,
}

impl EvaluationService {
    #[must_use]
    pub fn new(report_path: Option<PathBuf>) -> Self {
        let source = report_path.map_or(ReportSource::None, ReportSource::File);
        Self { source }
    }

    /// Serve an already-built report, e.g. one produced in-process by a
    /// `Predictor`.
    #[must_use]
    pub fn from_report(report: EvaluationReport) -> Self {
        Self {
            source: ReportSource::Inline(Arc::new(report)),
        }
    }

    #[must_use]
    pub fn report_path(&self) -> Option<&Path> {
        match &self.source {
            ReportSource::File(path) => Some(path),
            ReportSource::None | ReportSource::Inline(_) => None,
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !matches!(self.source, ReportSource::None)
    }

    /// Read and parse a report file.
    ///
    /// # Errors
    ///
    /// Returns `EvaluationError::Io` or `Parse` naming the offending path.
    pub async fn load_report(&self, path: &Path) -> Result<EvaluationReport, EvaluationError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| EvaluationError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let report = serde_json::from_str(&raw).map_err(|source| EvaluationError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "evaluation report loaded");
        Ok(report)
    }

    /// Load and summarize the configured report.
    ///
    /// # Errors
    ///
    /// Returns `EvaluationError::NoReport` when nothing is configured, or any
    /// load or metrics error.
    pub async fn load_configured(&self) -> Result<EvaluationSummary, EvaluationError> {
        match &self.source {
            ReportSource::None => Err(EvaluationError::NoReport),
            ReportSource::Inline(report) => Self::summarize(report),
            ReportSource::File(path) => {
                let report = self.load_report(path).await?;
                Self::summarize(&report)
            }
        }
    }

    /// Compute metrics, confusion matrix, per-class report, the first few
    /// misclassified samples and the training curves.
    ///
    /// # Errors
    ///
    /// Returns `EvaluationError::Metrics` if the label arrays are empty or
    /// differ in length.
    pub fn summarize(report: &EvaluationReport) -> Result<EvaluationSummary, EvaluationError> {
        let names = report.label_names.as_deref();
        let result = evaluate_labels(&report.y_true, &report.y_pred)?;
        let confusion = ConfusionMatrix::from_labels(&report.y_true, &report.y_pred)?;
        let classification = ClassificationReport::new(&report.y_true, &report.y_pred, names)?;
        let wrong = report
            .texts
            .as_deref()
            .map(|texts| {
                misclassified(
                    texts,
                    &report.y_true,
                    &report.y_pred,
                    names,
                    MISCLASSIFIED_LIMIT,
                )
            })
            .unwrap_or_default();

        let class_names = confusion
            .labels()
            .iter()
            .map(|&class| {
                names
                    .and_then(|names| names.get(class))
                    .cloned()
                    .unwrap_or_else(|| format!("Class {class}"))
            })
            .collect();

        let mut features = Vec::with_capacity(2);
        if report.texts.is_some() {
            features.push("text".to_owned());
        }
        features.push("label".to_owned());
        let dataset = DatasetInfo::new(
            report.y_true.len(),
            features,
            Some(report.y_true.as_slice()),
        );

        Ok(EvaluationSummary {
            result,
            confusion,
            report: classification,
            misclassified: wrong,
            history: TrainingHistory::from_logs(&report.training_logs),
            class_names,
            dataset,
            model_info: report.model_info.clone(),
        })
    }
}
