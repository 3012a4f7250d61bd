use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use services::{ClassifierError, EvaluationService, ModelCardService, Predictor, SequenceClassifier};
use academy_core::time::fixed_clock;
use uuid::Uuid;

/// Deterministic stand-in for a model: logits derived from text length.
struct LengthClassifier;

#[async_trait]
impl SequenceClassifier for LengthClassifier {
    async fn logits(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, ClassifierError> {
        Ok(texts
            .iter()
            .map(|text| {
                #[allow(clippy::cast_precision_loss)]
                let len = text.len() as f32;
                vec![10.0 - len, len / 2.0, (len % 3.0) * 1.5]
            })
            .collect())
    }
}

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("academy-eval-{}", Uuid::new_v4()))
}

#[tokio::test]
async fn batch_predict_matches_individual_predictions() {
    let predictor = Predictor::new(Arc::new(LengthClassifier));
    let texts: Vec<String> = [
        "ok",
        "terrible pacing",
        "a quiet triumph of a film",
        "meh",
        "loved every minute",
        "",
        "the soundtrack alone is worth it",
    ]
    .iter()
    .map(|s| (*s).to_owned())
    .collect();

    let mut individual = Vec::new();
    for text in &texts {
        individual.push(predictor.predict(text).await.unwrap());
    }

    for batch_size in [1, 2, 3, 7, 64] {
        let batched = predictor.batch_predict(&texts, batch_size).await.unwrap();
        assert_eq!(batched, individual, "batch size {batch_size}");
    }
}

#[tokio::test]
async fn report_file_to_model_card() {
    let dir = scratch_dir();
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let report_path = dir.join("report.json");
    tokio::fs::write(
        &report_path,
        r#"{
            "label_names": ["negative", "positive"],
            "y_true": [0, 1, 1, 0],
            "y_pred": [0, 1, 1, 0],
            "training_logs": [
                {"epoch": 1.0, "loss": 0.7},
                {"epoch": 1.0, "eval_loss": 0.5, "eval_accuracy": 0.8},
                {"epoch": 2.0, "loss": 0.3},
                {"epoch": 2.0, "eval_loss": 0.4, "eval_accuracy": 1.0}
            ]
        }"#,
    )
    .await
    .unwrap();

    let evaluation = EvaluationService::new(Some(report_path));
    let summary = evaluation.load_configured().await.expect("summary");
    assert!((summary.result.accuracy - 1.0).abs() < f64::EPSILON);
    assert!((summary.result.f1 - 1.0).abs() < f64::EPSILON);
    assert_eq!(summary.history.eval_accuracy, vec![0.8, 1.0]);

    let model_dir = dir.join("model");
    let written = ModelCardService::new(fixed_clock())
        .write("tiny-sentiment", "sentiment analysis", summary.result, &model_dir)
        .await
        .expect("write card");
    assert_eq!(written, model_dir.join("README.md"));
    let card = tokio::fs::read_to_string(&written).await.unwrap();
    assert!(card.contains("| Accuracy | 1.0000 |"), "{card}");

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn unreadable_report_names_the_path() {
    let missing = scratch_dir().join("nope.json");
    let err = EvaluationService::new(Some(missing.clone()))
        .load_configured()
        .await
        .unwrap_err();
    assert!(err.to_string().contains(&missing.display().to_string()));
}
