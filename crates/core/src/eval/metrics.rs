use serde::{Deserialize, Serialize};

use super::confusion::ConfusionMatrix;
use super::softmax::argmax_rows;
use super::{MetricsError, check_lengths};

/// Headline scores for a classifier run.
///
/// Precision, recall and F1 are averaged across classes weighted by class
/// support (the number of true samples per class).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Per-class precision, recall, F1 and support.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassScores {
    pub class: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: u64,
}

/// Fraction of exact matches between true and predicted labels.
///
/// # Errors
///
/// Returns `MetricsError` if the inputs are empty or differ in length.
#[allow(clippy::cast_precision_loss)]
pub fn accuracy(y_true: &[usize], y_pred: &[usize]) -> Result<f64, MetricsError> {
    check_lengths(y_true, y_pred)?;
    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn harmonic_mean(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    }
}

/// Scores for every label in the matrix, ascending. Undefined ratios are 0.
#[must_use]
pub fn class_scores(cm: &ConfusionMatrix) -> Vec<ClassScores> {
    cm.labels()
        .iter()
        .map(|&class| {
            let tp = cm.true_positives(class);
            let precision = ratio(tp, cm.predicted(class));
            let recall = ratio(tp, cm.support(class));
            ClassScores {
                class,
                precision,
                recall,
                f1: harmonic_mean(precision, recall),
                support: cm.support(class),
            }
        })
        .collect()
}

/// Support-weighted mean of (precision, recall, f1).
#[allow(clippy::cast_precision_loss)]
pub(crate) fn weighted_average(scores: &[ClassScores]) -> (f64, f64, f64) {
    let total: u64 = scores.iter().map(|s| s.support).sum();
    if total == 0 {
        return (0.0, 0.0, 0.0);
    }
    let weigh = |f: fn(&ClassScores) -> f64| {
        scores
            .iter()
            .map(|s| f(s) * s.support as f64)
            .sum::<f64>()
            / total as f64
    };
    (weigh(|s| s.precision), weigh(|s| s.recall), weigh(|s| s.f1))
}

/// Accuracy plus weighted precision/recall/F1 from label arrays.
///
/// # Errors
///
/// Returns `MetricsError` if the inputs are empty or differ in length.
pub fn evaluate_labels(
    y_true: &[usize],
    y_pred: &[usize],
) -> Result<EvaluationResult, MetricsError> {
    let cm = ConfusionMatrix::from_labels(y_true, y_pred)?;
    let (precision, recall, f1) = weighted_average(&class_scores(&cm));
    Ok(EvaluationResult {
        accuracy: accuracy(y_true, y_pred)?,
        precision,
        recall,
        f1,
    })
}

/// Derive argmax predictions from score rows, then evaluate against `labels`.
///
/// # Errors
///
/// Returns `MetricsError` on empty input, empty rows, or a length mismatch.
pub fn metrics(
    predictions: &[Vec<f32>],
    labels: &[usize],
) -> Result<EvaluationResult, MetricsError> {
    let preds = argmax_rows(predictions)?;
    evaluate_labels(labels, &preds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn perfect_predictions_score_one() {
        let preds = vec![vec![0.9, 0.1], vec![0.2, 0.8], vec![0.3, 0.7]];
        let result = metrics(&preds, &[0, 1, 1]).unwrap();
        assert!(close(result.accuracy, 1.0));
        assert!(close(result.precision, 1.0));
        assert!(close(result.recall, 1.0));
        assert!(close(result.f1, 1.0));
    }

    #[test]
    fn weighted_scores_match_hand_computation() {
        // class 0: p=1, r=0.5, f1=2/3; class 1: p=2/3, r=1, f1=0.8; supports 2/2
        let result = evaluate_labels(&[0, 0, 1, 1], &[0, 1, 1, 1]).unwrap();
        assert!(close(result.accuracy, 0.75));
        assert!(close(result.precision, (1.0 + 2.0 / 3.0) / 2.0));
        assert!(close(result.recall, 0.75));
        assert!(close(result.f1, (2.0 / 3.0 + 0.8) / 2.0));
    }

    #[test]
    fn never_predicted_class_has_zero_precision() {
        let cm = ConfusionMatrix::from_labels(&[0, 1, 1], &[0, 0, 0]).unwrap();
        let scores = class_scores(&cm);
        assert!(close(scores[1].precision, 0.0));
        assert!(close(scores[1].f1, 0.0));
        assert_eq!(scores[1].support, 2);
    }

    #[test]
    fn class_scores_carry_label_values() {
        let cm = ConfusionMatrix::from_labels(&[2, 40, 40], &[2, 40, 2]).unwrap();
        let scores = class_scores(&cm);
        let classes: Vec<_> = scores.iter().map(|s| s.class).collect();
        assert_eq!(classes, vec![2, 40]);
        assert!(close(scores[1].recall, 0.5));
        assert_eq!(scores[1].support, 2);
    }

    #[test]
    fn metrics_rejects_length_mismatch() {
        let err = metrics(&[vec![0.1, 0.9]], &[1, 0]).unwrap_err();
        assert!(matches!(err, MetricsError::LengthMismatch { .. }));
    }
}
