//! Predictions from an external classifier and summaries of saved runs.

mod classifier;
mod predictor;
mod report;
mod service;

pub use classifier::{HttpClassifier, LabelScore, SequenceClassifier, scores_to_logits};
pub use predictor::{Prediction, Predictor};
pub use report::EvaluationReport;
pub use service::{EvaluationService, EvaluationSummary};
