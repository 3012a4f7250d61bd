use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, ProgressRevision};
use crate::routes::Route;
use crate::views::LessonCard;
use crate::vm::{ProgressVm, map_lesson_card};

const QUICK_LINKS: [(&str, &str); 3] = [
    ("HuggingFace Docs", "https://huggingface.co/docs"),
    ("Transformers Tutorials", "https://huggingface.co/course"),
    ("GitHub Repository", "https://github.com/gouthamgo/FineTuning"),
];

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let revision = use_context::<ProgressRevision>();
    let _ = revision.get();

    let progress_service = ctx.progress();
    let progress = ProgressVm::from_summary(progress_service.summary());
    let featured: Vec<_> = ctx
        .catalog()
        .featured(&progress_service.snapshot())
        .iter()
        .map(map_lesson_card)
        .collect();

    rsx! {
        div { class: "page home-page",
            header { class: "hero",
                h2 { class: "view-title", "🚀 Fine-Tuning Learning Platform" }
                p { class: "view-subtitle", "Learn to Fine-Tune Transformer Models from Scratch" }
            }
            section { class: "home-progress",
                div { class: "metric-card",
                    span { class: "metric-label", "Lessons Completed" }
                    span { class: "metric-value", "{progress.completed_label}" }
                }
                div { class: "metric-card",
                    span { class: "metric-label", "In Progress" }
                    span { class: "metric-value", "{progress.in_progress}" }
                }
                div { class: "metric-card",
                    span { class: "metric-label", "Overall" }
                    span { class: "metric-value", "{progress.percent_label}" }
                }
            }
            if !featured.is_empty() {
                section { class: "featured",
                    h3 { "⭐ Start Here" }
                    for lesson in featured {
                        LessonCard { key: "{lesson.id}", lesson }
                    }
                }
            }
            section { class: "home-actions",
                Link { class: "btn btn-primary", to: Route::Lessons {}, "📚 Browse the Learning Path" }
                Link { class: "btn btn-secondary", to: Route::Evaluation {}, "📈 Review an Evaluation" }
            }
            section { class: "quick-links",
                h3 { "🎯 Quick Links" }
                ul {
                    for (label, url) in QUICK_LINKS {
                        QuickLink { key: "{url}", label, url }
                    }
                }
            }
            footer { class: "footer", "Built with ❤️ for aspiring ML engineers | Happy Learning! 🚀" }
        }
    }
}

#[component]
fn QuickLink(label: &'static str, url: &'static str) -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        li {
            a {
                href: "{url}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    ctx.open_link(url);
                },
                "{label}"
            }
        }
    }
}
