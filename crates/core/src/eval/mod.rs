//! Classification metrics and presentation-independent evaluation reports.

mod confusion;
mod info;
mod metrics;
mod model_card;
mod report;
mod softmax;
mod training;

use thiserror::Error;

pub use confusion::ConfusionMatrix;
pub use info::{DatasetInfo, LabelCount, ModelInfo};
pub use metrics::{ClassScores, EvaluationResult, accuracy, class_scores, evaluate_labels, metrics};
pub use model_card::ModelCard;
pub use report::{ClassificationReport, Misclassified, ReportRow, misclassified};
pub use softmax::{argmax, argmax_rows, softmax};
pub use training::{TrainingHistory, TrainingLogEntry, TrainingTimeEstimate};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MetricsError {
    #[error("no samples to evaluate")]
    Empty,

    #[error("length mismatch: {expected} labels but {actual} predictions")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("prediction row {index} is empty")]
    EmptyRow { index: usize },

    #[error("batch size must be greater than zero")]
    ZeroBatchSize,

    #[error("throughput must be a positive number of samples per second")]
    NonPositiveRate,
}

pub(crate) fn check_lengths(y_true: &[usize], y_pred: &[usize]) -> Result<(), MetricsError> {
    if y_true.len() != y_pred.len() {
        return Err(MetricsError::LengthMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(MetricsError::Empty);
    }
    Ok(())
}
