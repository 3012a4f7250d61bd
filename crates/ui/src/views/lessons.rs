use academy_core::catalog::CatalogFilter;
use academy_core::model::LessonId;
use dioxus::prelude::*;

use crate::context::{AppContext, ProgressRevision};
use crate::views::ViewError;
use crate::vm::{LessonCardVm, filter_tabs, map_catalog};

#[component]
pub fn LessonsView() -> Element {
    let ctx = use_context::<AppContext>();
    let revision = use_context::<ProgressRevision>();
    let mut filter = use_signal(CatalogFilter::default);
    let _ = revision.get();

    let active = filter();
    let view = ctx.catalog().render(&ctx.progress().snapshot(), active);
    let sections = map_catalog(&view);
    let tabs = filter_tabs(active);

    rsx! {
        div { class: "page lessons-page",
            header { class: "view-header",
                h2 { class: "view-title", "📚 Learning Path" }
                p { class: "view-subtitle", "Work through the modules in order. Notebooks open in Colab." }
            }
            div { class: "filter-tabs", role: "tablist",
                for tab in tabs {
                    button {
                        key: "{tab.label}",
                        class: if tab.active { "tab tab-active" } else { "tab" },
                        r#type: "button",
                        onclick: move |_| filter.set(tab.filter),
                        "{tab.label}"
                    }
                }
            }
            if sections.is_empty() {
                p { class: "empty", "No lessons match this filter." }
            }
            for section in sections {
                section { key: "{section.key}", class: "module",
                    header { class: "module-header",
                        h3 { "{section.heading}" }
                        p { class: "module-subtitle", "{section.subtitle}" }
                        p { class: "module-meta", "{section.meta}" }
                    }
                    div { class: "lesson-grid",
                        for lesson in section.lessons {
                            LessonCard { key: "{lesson.id}", lesson }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn LessonCard(lesson: LessonCardVm) -> Element {
    let ctx = use_context::<AppContext>();
    let revision = use_context::<ProgressRevision>();
    let mut error = use_signal(|| None::<ViewError>);

    let ctx_for_done = ctx.clone();
    let done_id = lesson.id.clone();
    let mark_done = move |_| {
        let progress = ctx_for_done.progress();
        let id = done_id.clone();
        spawn(async move {
            let Ok(id) = LessonId::new(id) else {
                error.set(Some(ViewError::Unknown));
                return;
            };
            match progress.mark_complete(&id).await {
                Ok(_) => {
                    error.set(None);
                    revision.bump();
                }
                Err(err) => error.set(Some(ViewError::from(&err))),
            }
        });
    };

    let start_id = lesson.id.clone();
    let start_link = lesson.link.clone();
    let start = move |_| {
        if let Some(url) = start_link.as_deref() {
            ctx.open_link(url);
        }
        let progress = ctx.progress();
        let id = start_id.clone();
        spawn(async move {
            let Ok(id) = LessonId::new(id) else {
                return;
            };
            match progress.mark_started(&id).await {
                Ok(true) => revision.bump(),
                Ok(false) => {}
                Err(err) => error.set(Some(ViewError::from(&err))),
            }
        });
    };

    rsx! {
        article { class: "{lesson.status_class}",
            div { class: "lesson-head",
                span { class: "lesson-icon", "{lesson.icon}" }
                span { class: "lesson-status", title: "status", "{lesson.status_glyph}" }
                span { class: "{lesson.badge_class}", "{lesson.badge}" }
            }
            h4 { class: "lesson-title", "{lesson.title}" }
            p { class: "lesson-meta", "{lesson.meta}" }
            p { class: "lesson-description", "{lesson.description}" }
            div { class: "lesson-actions",
                if lesson.can_start {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: start,
                        "🚀 Start Learning"
                    }
                } else {
                    span { class: "coming-soon", "Coming Soon!" }
                }
                if lesson.completed {
                    span { class: "done", "✓ Done" }
                } else {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: mark_done,
                        "✓ Mark Done"
                    }
                }
            }
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
        }
    }
}
