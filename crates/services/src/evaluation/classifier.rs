use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
use crate::error::ClassifierError;

/// Tokenizes and forwards texts through a sequence-classification model.
#[async_trait]
pub trait SequenceClassifier: Send + Sync {
    /// One row of raw class logits per input text, in input order.
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError` if the model cannot be reached or answers
    /// with something that is not a logit matrix.
    async fn logits(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ClassifierError>;
}

/// Classifier backed by an HTTP inference endpoint.
///
/// Sends `{"inputs": [...]}` and accepts either a raw logit matrix or
/// per-label scores (`[[{"label": "LABEL_1", "score": 0.9}, ...]]`).
#[derive(Clone)]
pub struct HttpClassifier {
    client: Client,
    config: Option<ClassifierConfig>,
}

impl HttpClassifier {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ClassifierConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<ClassifierConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl SequenceClassifier for HttpClassifier {
    async fn logits(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ClassifierError> {
        let config = self.config.as_ref().ok_or(ClassifierError::Disabled)?;

        tracing::debug!(endpoint = %config.endpoint, inputs = texts.len(), "classifier request");
        let mut request = self
            .client
            .post(config.endpoint.clone())
            .json(&InferenceRequest { inputs: texts });
        if let Some(token) = &config.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(ClassifierError::HttpStatus(response.status()));
        }

        let body: InferenceResponse = response.json().await?;
        let rows = match body {
            InferenceResponse::Logits(rows) => rows,
            InferenceResponse::Scores(rows) => scores_to_logits(&rows, &config.labels)?,
        };
        if rows.is_empty() && !texts.is_empty() {
            return Err(ClassifierError::EmptyResponse);
        }
        Ok(rows)
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a [String],
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Logits(Vec<Vec<f32>>),
    Scores(Vec<Vec<LabelScore>>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

/// Upper bound on `LABEL_<n>` indices when no label names are configured.
const MAX_UNNAMED_CLASSES: usize = 4096;

fn label_index(label: &str, labels: &[String]) -> Option<usize> {
    if let Some(index) = labels.iter().position(|known| known == label) {
        return Some(index);
    }
    let index: usize = label.strip_prefix("LABEL_")?.parse().ok()?;
    let bound = if labels.is_empty() {
        MAX_UNNAMED_CLASSES
    } else {
        labels.len()
    };
    (index < bound).then_some(index)
}

/// Turn per-label probabilities into log-probabilities indexed by class, so
/// that a softmax over each row reproduces the scores.
///
/// Labels resolve through `labels` first, then the `LABEL_<n>` convention.
/// `LABEL_<n>` must index into `labels` when names are configured.
/// Classes missing from a row get negative infinity (probability zero).
///
/// # Errors
///
/// Returns `ClassifierError::UnknownLabel` if a label cannot be mapped to an
/// index, or `EmptyResponse` if a row has no scores.
pub fn scores_to_logits(
    rows: &[Vec<LabelScore>],
    labels: &[String],
) -> Result<Vec<Vec<f32>>, ClassifierError> {
    rows.iter()
        .map(|row| {
            if row.is_empty() {
                return Err(ClassifierError::EmptyResponse);
            }
            let indexed = row
                .iter()
                .map(|entry| {
                    label_index(&entry.label, labels)
                        .map(|index| (index, entry.score))
                        .ok_or_else(|| ClassifierError::UnknownLabel(entry.label.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;

            let width = indexed
                .iter()
                .map(|(index, _)| index + 1)
                .max()
                .unwrap_or(0)
                .max(labels.len());
            let mut logits = vec![f32::NEG_INFINITY; width];
            for (index, score) in indexed {
                logits[index] = score.max(f32::MIN_POSITIVE).ln();
            }
            Ok(logits)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::eval::softmax;

    fn score(label: &str, score: f32) -> LabelScore {
        LabelScore {
            label: label.into(),
            score,
        }
    }

    #[test]
    fn label_scores_round_trip_through_softmax() {
        let rows = vec![vec![score("LABEL_1", 0.8), score("LABEL_0", 0.2)]];
        let logits = scores_to_logits(&rows, &[]).unwrap();
        let probs = softmax(&logits[0]);
        assert!((probs[0] - 0.2).abs() < 1e-5);
        assert!((probs[1] - 0.8).abs() < 1e-5);
    }

    #[test]
    fn configured_names_take_precedence() {
        let labels = vec!["negative".to_owned(), "positive".to_owned()];
        let rows = vec![vec![score("positive", 0.6), score("negative", 0.4)]];
        let logits = scores_to_logits(&rows, &labels).unwrap();
        assert_eq!(logits[0].len(), 2);
        assert!(logits[0][1] > logits[0][0]);
    }

    #[test]
    fn missing_classes_get_zero_probability() {
        let labels = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
        let rows = vec![vec![score("b", 1.0)]];
        let logits = scores_to_logits(&rows, &labels).unwrap();
        let probs = softmax(&logits[0]);
        assert_eq!(probs.len(), 3);
        assert!((probs[1] - 1.0).abs() < 1e-6);
        assert!(probs[0].abs() < 1e-6);
    }

    #[test]
    fn unknown_labels_are_rejected() {
        let rows = vec![vec![score("maybe", 0.5)]];
        let err = scores_to_logits(&rows, &[]).unwrap_err();
        assert!(matches!(err, ClassifierError::UnknownLabel(label) if label == "maybe"));
    }

    #[test]
    fn huge_label_indices_are_rejected() {
        let label = format!("LABEL_{}", usize::MAX);
        let rows = vec![vec![score(&label, 0.9)]];
        let err = scores_to_logits(&rows, &[]).unwrap_err();
        assert!(matches!(err, ClassifierError::UnknownLabel(l) if l == label));

        let rows = vec![vec![score("LABEL_5000", 0.9)]];
        assert!(scores_to_logits(&rows, &[]).is_err());
    }

    #[test]
    fn label_indices_must_fit_configured_names() {
        let labels = vec!["negative".to_owned(), "positive".to_owned()];
        let rows = vec![vec![score("LABEL_1", 0.7), score("LABEL_0", 0.3)]];
        assert_eq!(scores_to_logits(&rows, &labels).unwrap()[0].len(), 2);

        let rows = vec![vec![score("LABEL_2", 0.7)]];
        let err = scores_to_logits(&rows, &labels).unwrap_err();
        assert!(matches!(err, ClassifierError::UnknownLabel(l) if l == "LABEL_2"));
    }

    #[test]
    fn response_shapes_deserialize() {
        let logits: InferenceResponse = serde_json::from_str("[[0.1, 2.0]]").unwrap();
        assert!(matches!(logits, InferenceResponse::Logits(rows) if rows[0].len() == 2));

        let scores: InferenceResponse =
            serde_json::from_str(r#"[[{"label": "LABEL_0", "score": 0.3}]]"#).unwrap();
        assert!(matches!(scores, InferenceResponse::Scores(rows) if rows[0][0].label == "LABEL_0"));
    }

    #[tokio::test]
    async fn disabled_classifier_errors() {
        let classifier = HttpClassifier::new(None);
        assert!(!classifier.enabled());
        let err = classifier.logits(&["hi".to_owned()]).await.unwrap_err();
        assert!(matches!(err, ClassifierError::Disabled));
    }
}
