use dioxus::prelude::*;

use crate::charts::{ConfusionMatrixChart, TrainingCurvesChart};
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{EvaluationVm, map_evaluation};

#[component]
pub fn EvaluationView() -> Element {
    let ctx = use_context::<AppContext>();
    let evaluation = ctx.evaluation();

    let mut resource = use_resource(move || {
        let evaluation = evaluation.clone();
        async move {
            let summary = evaluation.load_configured().await.map_err(|err| {
                tracing::warn!(error = %err, "evaluation report unavailable");
                ViewError::from(&err)
            })?;
            Ok(map_evaluation(&summary))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page evaluation-page",
            header { class: "view-header",
                h2 { class: "view-title", "📈 Model Evaluation" }
                p { class: "view-subtitle", "Metrics, confusion matrix and training curves for a saved run." }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(vm) => rsx! {
                    EvaluationPanel { vm }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "error-panel",
                        p { class: "error", "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| resource.restart(),
                            "Retry"
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn EvaluationPanel(vm: EvaluationVm) -> Element {
    let EvaluationVm {
        metrics,
        report_text,
        misclassified,
        heatmap,
        curves,
    } = vm;
    let nothing_misclassified = misclassified.is_empty();

    rsx! {
        section { class: "metric-row",
            for metric in metrics {
                div { key: "{metric.label}", class: "metric-card",
                    span { class: "metric-label", "{metric.label}" }
                    span { class: "metric-value", "{metric.value}" }
                }
            }
        }
        section { class: "chart-panel",
            h3 { "Confusion Matrix" }
            ConfusionMatrixChart { heatmap }
        }
        if let Some(curves) = curves {
            section { class: "chart-panel",
                h3 { "Training Curves" }
                TrainingCurvesChart { curves }
            }
        }
        section { class: "report-panel",
            h3 { "Classification Report" }
            pre { class: "report", "{report_text}" }
        }
        section { class: "misclassified-panel",
            h3 { "Misclassified Examples" }
            if nothing_misclassified {
                p { class: "empty", "No misclassified examples with text to show." }
            }
            ul {
                for (index, item) in misclassified.into_iter().enumerate() {
                    li { key: "{index}", class: "misclassified",
                        strong { "{item.heading}" }
                        p { class: "preview", "{item.preview}" }
                        p { class: "verdict", "{item.verdict}" }
                    }
                }
            }
        }
    }
}
