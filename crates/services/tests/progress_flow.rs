use std::path::PathBuf;

use academy_core::catalog::CatalogFilter;
use academy_core::model::{LessonId, LessonStatus};
use academy_core::time::fixed_clock;
use services::{AppConfig, AppServices};
use uuid::Uuid;

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("academy-services-{}", Uuid::new_v4()))
}

#[tokio::test]
async fn progress_survives_restart() {
    let dir = scratch_dir();
    let config = AppConfig::new(dir.join("webapp").join("progress.json"));
    let m1l1 = LessonId::new("m1l1").unwrap();
    let m2l1 = LessonId::new("m2l1").unwrap();

    let services = AppServices::from_config(&config, fixed_clock())
        .await
        .expect("fresh install loads");
    assert_eq!(services.progress().summary().completed, 0);

    let progress = services.progress();
    progress.mark_complete(&m1l1).await.expect("complete");
    progress.mark_started(&m2l1).await.expect("start");
    drop(services);

    let reopened = AppServices::from_config(&config, fixed_clock())
        .await
        .expect("reload");
    let progress = reopened.progress();
    assert_eq!(progress.status_of(&m1l1), LessonStatus::Completed);
    assert_eq!(progress.status_of(&m2l1), LessonStatus::InProgress);

    let summary = progress.summary();
    assert_eq!(summary.total, 13);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.in_progress, 1);

    let view = reopened
        .catalog()
        .render(&progress.snapshot(), CatalogFilter::Available);
    let done: Vec<_> = view
        .lessons()
        .filter(|entry| entry.status == LessonStatus::Completed)
        .map(|entry| entry.id.to_string())
        .collect();
    assert_eq!(done, vec!["m1l1"]);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn starting_a_completed_lesson_keeps_it_completed() {
    let services = AppServices::in_memory(fixed_clock()).await.unwrap();
    let progress = services.progress();
    let id = LessonId::new("m1l3").unwrap();

    progress.mark_complete(&id).await.unwrap();
    assert!(!progress.mark_started(&id).await.unwrap());
    assert_eq!(progress.status_of(&id), LessonStatus::Completed);
}

#[tokio::test]
async fn in_memory_services_have_no_predictor() {
    let services = AppServices::in_memory(fixed_clock()).await.unwrap();
    assert!(services.predictor().is_none());
    assert!(services.evaluation().report_path().is_none());
}
