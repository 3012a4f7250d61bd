use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use academy_core::catalog::CatalogFilter;
use academy_core::eval::TrainingTimeEstimate;
use academy_core::model::LessonId;
use anyhow::{Context, Result, anyhow, bail};
use services::{AppServices, CatalogView, EvaluationService, EvaluationSummary, Prediction};
use ui::vm::{curves_vm, heatmap_vm};
use ui::{render_confusion_svg, render_curves_svg};

use super::{EstimateArgs, EvaluateArgs, ModelCardArgs, PredictArgs};

fn lesson_id(raw: &str) -> Result<LessonId> {
    LessonId::new(raw).with_context(|| format!("invalid lesson id {raw:?}"))
}

fn require_report(report: Option<&Path>) -> Result<&Path> {
    report.ok_or_else(|| anyhow!("no report given; pass --report <file> or set ACADEMY_REPORT_FILE"))
}

pub fn progress(services: &AppServices) -> Result<()> {
    let progress = services.progress();
    let view = services
        .catalog()
        .render(&progress.snapshot(), CatalogFilter::All);
    print!("{}", format_progress(&view));
    let summary = progress.summary();
    println!(
        "\nLessons completed: {}/{} ({:.0}%)",
        summary.completed,
        summary.total,
        summary.percent_complete()
    );
    Ok(())
}

pub async fn complete(services: &AppServices, raw: &str) -> Result<()> {
    let id = lesson_id(raw)?;
    let changed = services
        .progress()
        .mark_complete(&id)
        .await
        .with_context(|| format!("could not mark {id} complete"))?;
    if changed {
        println!("✅ {id} marked completed");
    } else {
        println!("{id} was already completed");
    }
    Ok(())
}

pub async fn start(services: &AppServices, raw: &str) -> Result<()> {
    let id = lesson_id(raw)?;
    let changed = services
        .progress()
        .mark_started(&id)
        .await
        .with_context(|| format!("could not start {id}"))?;
    if changed {
        println!("🔵 {id} marked in progress");
    } else {
        println!("{id} unchanged ({})", services.progress().status_of(&id));
    }
    Ok(())
}

pub async fn reset(services: &AppServices) -> Result<()> {
    services
        .progress()
        .reset()
        .await
        .context("could not reset progress")?;
    println!("Progress cleared");
    Ok(())
}

pub async fn evaluate(
    services: &AppServices,
    report: Option<&Path>,
    args: &EvaluateArgs,
) -> Result<()> {
    let path = require_report(report)?;
    let evaluation = services.evaluation();
    let report = evaluation.load_report(path).await?;
    let summary = EvaluationService::summarize(&report)?;
    print!("{}", format_summary(&summary));

    if let Some(dir) = &args.svg_dir {
        for written in write_charts(&summary, dir).await? {
            println!("Saved {}", written.display());
        }
    }
    Ok(())
}

async fn write_charts(summary: &EvaluationSummary, dir: &Path) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("could not create {}", dir.display()))?;

    let mut charts = vec![(
        "confusion_matrix",
        render_confusion_svg(&heatmap_vm(&summary.confusion, &summary.class_names)),
    )];
    if let Some(curves) = curves_vm(&summary.history) {
        charts.extend(render_curves_svg(&curves));
    }

    let mut written = Vec::with_capacity(charts.len());
    for (name, svg) in charts {
        let path = dir.join(format!("{name}.svg"));
        tokio::fs::write(&path, svg)
            .await
            .with_context(|| format!("could not write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

pub async fn model_card(
    services: &AppServices,
    report: Option<&Path>,
    args: &ModelCardArgs,
) -> Result<()> {
    let path = require_report(report)?;
    let report = services.evaluation().load_report(path).await?;
    let summary = EvaluationService::summarize(&report)?;
    let written = services
        .model_cards()
        .write(&args.model_name, &args.task, summary.result, &args.out)
        .await?;
    println!("✅ Model card saved to {}", written.display());
    Ok(())
}

pub async fn predict(services: &AppServices, labels: &[String], args: &PredictArgs) -> Result<()> {
    let Some(predictor) = services.predictor() else {
        bail!("no classifier configured; pass --classifier-url or set ACADEMY_CLASSIFIER_URL");
    };
    let predictions = predictor.batch_predict(&args.texts, args.batch_size).await?;
    for (text, prediction) in args.texts.iter().zip(&predictions) {
        println!("{}", format_prediction(text, prediction, labels));
    }
    Ok(())
}

pub fn estimate(args: &EstimateArgs) -> Result<()> {
    println!("{}", format_estimate(args)?);
    Ok(())
}

fn format_estimate(args: &EstimateArgs) -> Result<String> {
    let estimate = TrainingTimeEstimate::estimate(
        args.samples,
        args.batch_size,
        args.epochs,
        args.samples_per_second,
    )
    .context("could not estimate training time")?;
    Ok(format!(
        "Steps per epoch: {}\nTotal steps: {}\n{estimate}",
        estimate.steps_per_epoch, estimate.total_steps
    ))
}

fn format_progress(view: &CatalogView) -> String {
    let mut out = String::new();
    for section in &view.sections {
        let _ = writeln!(
            out,
            "{} {} ({}, {}/{} done)",
            section.emoji, section.title, section.duration, section.completed, section.total
        );
        for lesson in &section.lessons {
            let _ = writeln!(
                out,
                "  {} {:<5} {} ({})",
                lesson.status_glyph(),
                lesson.id.as_str(),
                lesson.title,
                lesson.duration
            );
        }
    }
    out
}

fn format_summary(summary: &EvaluationSummary) -> String {
    let r = summary.result;
    let mut out = String::new();
    if let Some(info) = &summary.model_info {
        let _ = writeln!(out, "{info}\n");
    }
    let _ = writeln!(out, "{}\n", summary.dataset);
    let _ = writeln!(out, "Accuracy:  {:.4}", r.accuracy);
    let _ = writeln!(out, "Precision: {:.4}", r.precision);
    let _ = writeln!(out, "Recall:    {:.4}", r.recall);
    let _ = writeln!(out, "F1 Score:  {:.4}", r.f1);
    let _ = writeln!(out, "\n{}", summary.report);
    if !summary.misclassified.is_empty() {
        let _ = writeln!(out, "Misclassified examples:");
        for item in &summary.misclassified {
            let _ = writeln!(out, "{item}");
        }
    }
    out
}

fn format_prediction(text: &str, prediction: &Prediction, labels: &[String]) -> String {
    let label = labels
        .get(prediction.label)
        .cloned()
        .unwrap_or_else(|| format!("LABEL_{}", prediction.label));
    format!(
        "{text}\n  → {label} (confidence {:.2}%)",
        f64::from(prediction.confidence) * 100.0
    )
}
