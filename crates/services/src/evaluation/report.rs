use academy_core::eval::{ModelInfo, TrainingLogEntry};
use serde::{Deserialize, Serialize};

/// Saved outcome of an evaluation run, as written by a training notebook.
///
/// `y_true[i]` and `y_pred[i]` are class indices for sample `i`. The
/// remaining fields are optional context for the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_names: Option<Vec<String>>,
    pub y_true: Vec<usize>,
    pub y_pred: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texts: Option<Vec<String>>,
    #[serde(default)]
    pub training_logs: Vec<TrainingLogEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_info: Option<ModelInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_report_parses() {
        let report: EvaluationReport =
            serde_json::from_str(r#"{"y_true": [0, 1], "y_pred": [0, 0]}"#).unwrap();
        assert!(report.label_names.is_none());
        assert!(report.training_logs.is_empty());
        assert_eq!(report.y_pred, vec![0, 0]);
        assert!(report.model_info.is_none());
    }

    #[test]
    fn model_info_block_parses() {
        let report: EvaluationReport = serde_json::from_str(
            r#"{
                "y_true": [0], "y_pred": [0],
                "model_info": {
                    "model_type": "DistilBertForSequenceClassification",
                    "total_params": 66955010,
                    "trainable_params": 66955010
                }
            }"#,
        )
        .unwrap();
        let info = report.model_info.unwrap();
        assert_eq!(info.total_params, 66_955_010);
        assert_eq!(info.non_trainable_params(), 0);
    }
}
