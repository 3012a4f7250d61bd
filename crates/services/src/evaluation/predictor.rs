use std::sync::Arc;

use academy_core::eval::{EvaluationResult, MetricsError, argmax, evaluate_labels, softmax};
use serde::Serialize;

use crate::error::{ClassifierError, EvaluationError};

use super::classifier::SequenceClassifier;

/// Model output for one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub label: usize,
    /// Highest class probability.
    pub confidence: f32,
    pub probabilities: Vec<f32>,
}

impl Prediction {
    fn from_logits(logits: &[f32], index: usize) -> Result<Self, MetricsError> {
        let probabilities = softmax(logits);
        let label = argmax(&probabilities).ok_or(MetricsError::EmptyRow { index })?;
        Ok(Self {
            label,
            confidence: probabilities[label],
            probabilities,
        })
    }
}

/// Turns classifier logits into labelled predictions.
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn SequenceClassifier>,
}

impl Predictor {
    #[must_use]
    pub fn new(classifier: Arc<dyn SequenceClassifier>) -> Self {
        Self { classifier }
    }

    /// Classify a single text.
    ///
    /// # Errors
    ///
    /// Returns `EvaluationError` if the classifier fails or returns a row
    /// count or width that cannot be interpreted.
    pub async fn predict(&self, text: &str) -> Result<Prediction, EvaluationError> {
        let texts = [text.to_owned()];
        let mut predictions = self.run_chunk(&texts, 0).await?;
        predictions.pop().ok_or_else(|| {
            ClassifierError::ShapeMismatch {
                expected: 1,
                actual: 0,
            }
            .into()
        })
    }

    /// Classify `texts` in contiguous chunks of `batch_size`, awaiting one
    /// chunk at a time. Output order matches input order.
    ///
    /// # Errors
    ///
    /// Returns `EvaluationError::InvalidBatchSize` for a zero batch size, or
    /// the first classifier or shape error encountered.
    pub async fn batch_predict(
        &self,
        texts: &[String],
        batch_size: usize,
    ) -> Result<Vec<Prediction>, EvaluationError> {
        if batch_size == 0 {
            return Err(EvaluationError::InvalidBatchSize);
        }

        let mut predictions = Vec::with_capacity(texts.len());
        for (chunk_index, chunk) in texts.chunks(batch_size).enumerate() {
            let offset = chunk_index * batch_size;
            predictions.extend(self.run_chunk(chunk, offset).await?);
            tracing::debug!(done = predictions.len(), total = texts.len(), "batch predicted");
        }
        Ok(predictions)
    }

    /// Predict every text and score the predictions against `labels`.
    ///
    /// # Errors
    ///
    /// Returns `EvaluationError` if prediction fails or the label count does
    /// not match the text count.
    pub async fn evaluate(
        &self,
        texts: &[String],
        labels: &[usize],
        batch_size: usize,
    ) -> Result<(Vec<Prediction>, EvaluationResult), EvaluationError> {
        let predictions = self.batch_predict(texts, batch_size).await?;
        let y_pred: Vec<usize> = predictions.iter().map(|p| p.label).collect();
        let result = evaluate_labels(labels, &y_pred)?;
        Ok((predictions, result))
    }

    async fn run_chunk(
        &self,
        chunk: &[String],
        offset: usize,
    ) -> Result<Vec<Prediction>, EvaluationError> {
        let rows = self.classifier.logits(chunk).await?;
        if rows.len() != chunk.len() {
            return Err(ClassifierError::ShapeMismatch {
                expected: chunk.len(),
                actual: rows.len(),
            }
            .into());
        }
        rows.iter()
            .enumerate()
            .map(|(i, row)| Prediction::from_logits(row, offset + i).map_err(Into::into))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Logits favour class 1 when the text contains "good".
    struct KeywordClassifier {
        calls: Mutex<Vec<usize>>,
    }

    #[async_trait]
    impl SequenceClassifier for KeywordClassifier {
        async fn logits(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ClassifierError> {
            self.calls.lock().unwrap().push(texts.len());
            Ok(texts
                .iter()
                .map(|t| {
                    if t.contains("good") {
                        vec![0.0, 2.0]
                    } else {
                        vec![2.0, 0.0]
                    }
                })
                .collect())
        }
    }

    struct DroppingClassifier;

    #[async_trait]
    impl SequenceClassifier for DroppingClassifier {
        async fn logits(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, ClassifierError> {
            Ok(vec![])
        }
    }

    fn keyword() -> Arc<KeywordClassifier> {
        Arc::new(KeywordClassifier {
            calls: Mutex::new(Vec::new()),
        })
    }

    fn texts(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_owned()).collect()
    }

    #[tokio::test]
    async fn predict_returns_label_and_confidence() {
        let predictor = Predictor::new(keyword());
        let prediction = predictor.predict("a good movie").await.unwrap();
        assert_eq!(prediction.label, 1);
        assert!((prediction.probabilities.iter().sum::<f32>() - 1.0).abs() < 1e-6);
        assert!((prediction.confidence - prediction.probabilities[1]).abs() < f32::EPSILON);
        assert!(prediction.confidence > 0.85);
    }

    #[tokio::test]
    async fn batches_are_contiguous_chunks() {
        let classifier = keyword();
        let predictor = Predictor::new(classifier.clone());
        let inputs = texts(&["good", "bad", "good", "bad", "good"]);

        let predictions = predictor.batch_predict(&inputs, 2).await.unwrap();
        let labels: Vec<_> = predictions.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec![1, 0, 1, 0, 1]);
        assert_eq!(*classifier.calls.lock().unwrap(), vec![2, 2, 1]);
    }

    #[tokio::test]
    async fn zero_batch_size_is_rejected() {
        let predictor = Predictor::new(keyword());
        let err = predictor.batch_predict(&texts(&["x"]), 0).await.unwrap_err();
        assert!(matches!(err, EvaluationError::InvalidBatchSize));
    }

    #[tokio::test]
    async fn row_count_mismatch_is_an_error() {
        let predictor = Predictor::new(Arc::new(DroppingClassifier));
        let err = predictor.batch_predict(&texts(&["x", "y"]), 8).await.unwrap_err();
        assert!(matches!(
            err,
            EvaluationError::Classifier(ClassifierError::ShapeMismatch {
                expected: 2,
                actual: 0
            })
        ));
    }

    #[tokio::test]
    async fn evaluate_scores_predictions() {
        let predictor = Predictor::new(keyword());
        let inputs = texts(&["good", "bad", "good", "meh"]);
        let (_, result) = predictor.evaluate(&inputs, &[1, 0, 0, 0], 3).await.unwrap();
        assert!((result.accuracy - 0.75).abs() < 1e-9);
    }
}
