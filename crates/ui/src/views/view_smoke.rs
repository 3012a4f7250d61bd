use std::sync::Arc;

use academy_core::eval::TrainingLogEntry;
use academy_core::model::{LessonId, ProgressMap};
use services::{EvaluationReport, EvaluationService};
use storage::repository::{InMemoryRepository, Storage};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with};

fn id(raw: &str) -> LessonId {
    LessonId::new(raw).unwrap()
}

fn seeded_storage() -> Storage {
    let mut progress = ProgressMap::new();
    progress.mark_complete(id("m1l1"));
    progress.mark_started(id("m1l2"));
    Storage {
        progress: Arc::new(InMemoryRepository::with_progress(progress)),
    }
}

fn sentiment_report() -> EvaluationReport {
    EvaluationReport {
        label_names: Some(vec!["negative".into(), "positive".into()]),
        y_true: vec![1, 0, 1, 1, 0, 0],
        y_pred: vec![1, 0, 0, 1, 0, 1],
        texts: Some(vec![
            "Loved it".into(),
            "Terrible".into(),
            "Not bad at all".into(),
            "Great fun".into(),
            "Boring".into(),
            "I wanted to like it".into(),
        ]),
        training_logs: vec![
            TrainingLogEntry {
                epoch: Some(1.0),
                loss: Some(0.7),
                eval_loss: Some(0.6),
                eval_accuracy: Some(0.6),
            },
            TrainingLogEntry {
                epoch: Some(2.0),
                loss: Some(0.4),
                eval_loss: Some(0.45),
                eval_accuracy: Some(0.67),
            },
        ],
        model_info: None,
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_progress_and_featured_lesson() {
    let mut harness = setup_view_harness_with(ViewKind::Home, seeded_storage(), None).await;
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("Fine-Tuning Learning Platform"),
        "missing title in {html}"
    );
    assert!(html.contains("1/13"), "missing completed count in {html}");
    assert!(html.contains("Start Here"), "missing featured section in {html}");
    assert!(
        html.contains("ACTUALLY Fine-Tune Your First Model!"),
        "missing featured lesson in {html}"
    );
    assert!(html.contains("huggingface.co/docs"), "missing quick links in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lessons_view_smoke_renders_modules_and_statuses() {
    let mut harness = setup_view_harness_with(ViewKind::Lessons, seeded_storage(), None).await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Learning Path"), "missing header in {html}");
    assert!(html.contains("Foundations"), "missing first module in {html}");
    assert!(html.contains("Deployment"), "missing last module in {html}");
    assert!(html.contains("1/3 done"), "missing module count in {html}");
    assert!(html.contains("lesson-completed"), "missing completed card in {html}");
    assert!(html.contains("lesson-in-progress"), "missing started card in {html}");
    assert!(html.contains("Start Learning"), "missing start button in {html}");
    assert!(html.contains("Coming Soon!"), "missing upcoming marker in {html}");
    assert!(html.contains("Mark Done"), "missing mark done button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lessons_view_smoke_starts_with_all_filter_active() {
    let mut harness = setup_view_harness(ViewKind::Lessons).await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("tab tab-active"), "missing active tab in {html}");
    assert!(html.contains("Coming Soon"), "missing coming soon tab in {html}");
    assert!(harness.links.opened().is_empty());
    assert_eq!(harness.progress.summary().completed, 0);
}

#[tokio::test(flavor = "current_thread")]
async fn evaluation_view_smoke_renders_metrics_and_charts() {
    let evaluation = EvaluationService::from_report(sentiment_report());
    let mut harness =
        setup_view_harness_with(ViewKind::Evaluation, Storage::in_memory(), Some(evaluation))
            .await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Model Evaluation"), "missing header in {html}");
    assert!(html.contains("Accuracy"), "missing accuracy card in {html}");
    assert!(html.contains("0.6667"), "missing accuracy value in {html}");
    assert!(html.contains("Confusion Matrix"), "missing heatmap in {html}");
    assert!(html.contains("<svg"), "missing svg chart in {html}");
    assert!(html.contains("Training Curves"), "missing curves in {html}");
    assert!(html.contains("Misclassified Examples"), "missing list in {html}");
    assert!(
        html.contains("True: positive | Predicted: negative"),
        "missing verdict in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn evaluation_view_smoke_explains_missing_report() {
    let mut harness = setup_view_harness(ViewKind::Evaluation).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("ACADEMY_REPORT_FILE"),
        "missing configuration hint in {html}"
    );
    assert!(html.contains("Retry"), "missing retry button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn about_view_smoke_renders_guide_and_tips() {
    let mut harness = setup_view_harness(ViewKind::About).await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Getting Started"), "missing guide in {html}");
    assert!(html.contains("Tip 4: Experiment"), "missing tips in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn deploy_view_smoke_renders_sanitized_guide() {
    let mut harness = setup_view_harness(ViewKind::Deploy).await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Deploy Your Model"), "missing header in {html}");
    assert!(html.contains("<table>"), "missing host table in {html}");
    assert!(html.contains("ACADEMY_CLASSIFIER_URL"), "missing classifier hint in {html}");
    assert!(!html.contains("<script"), "unexpected script in {html}");
}
