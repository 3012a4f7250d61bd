use services::EvaluationSummary;

use super::chart_vm::{CurvesVm, HeatmapVm, curves_vm, heatmap_vm};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricCardVm {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MisclassifiedVm {
    pub heading: String,
    pub preview: String,
    pub verdict: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationVm {
    pub metrics: Vec<MetricCardVm>,
    pub report_text: String,
    pub misclassified: Vec<MisclassifiedVm>,
    pub heatmap: HeatmapVm,
    pub curves: Option<CurvesVm>,
}

#[must_use]
pub fn map_evaluation(summary: &EvaluationSummary) -> EvaluationVm {
    let r = summary.result;
    let metrics = [
        ("Accuracy", r.accuracy),
        ("Precision", r.precision),
        ("Recall", r.recall),
        ("F1 Score", r.f1),
    ]
    .into_iter()
    .map(|(label, value)| MetricCardVm {
        label,
        value: format!("{value:.4}"),
    })
    .collect();

    let misclassified = summary
        .misclassified
        .iter()
        .map(|m| MisclassifiedVm {
            heading: format!("Example {}", m.index),
            preview: m.preview.clone(),
            verdict: format!("True: {} | Predicted: {}", m.true_name, m.predicted_name),
        })
        .collect();

    EvaluationVm {
        metrics,
        report_text: summary.report.to_string(),
        misclassified,
        heatmap: heatmap_vm(&summary.confusion, &summary.class_names),
        curves: curves_vm(&summary.history),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::{EvaluationReport, EvaluationService};

    #[test]
    fn metrics_are_four_decimal_cards() {
        let report = EvaluationReport {
            label_names: Some(vec!["neg".into(), "pos".into()]),
            y_true: vec![0, 1, 1, 0],
            y_pred: vec![0, 1, 0, 0],
            texts: Some(vec!["a".into(), "b".into(), "c".into(), "d".into()]),
            training_logs: Vec::new(),
            model_info: None,
        };
        let summary = EvaluationService::summarize(&report).unwrap();
        let vm = map_evaluation(&summary);

        assert_eq!(vm.metrics[0].label, "Accuracy");
        assert_eq!(vm.metrics[0].value, "0.7500");
        assert_eq!(vm.misclassified.len(), 1);
        assert_eq!(vm.misclassified[0].verdict, "True: pos | Predicted: neg");
        assert!(vm.report_text.contains("weighted avg"), "{}", vm.report_text);
        assert!(vm.curves.is_none());
    }
}
