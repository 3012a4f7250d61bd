use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::{AppContext, ProgressRevision};
use crate::views::{AboutView, DeployView, EvaluationView, HomeView, LessonsView};
use crate::vm::ProgressVm;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/lessons", LessonsView)] Lessons {},
        #[route("/evaluation", EvaluationView)] Evaluation {},
        #[route("/about", AboutView)] About {},
        #[route("/deploy", DeployView)] Deploy {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let revision = use_context::<ProgressRevision>();
    let _ = revision.get();
    let progress = ProgressVm::from_summary(ctx.progress().summary());

    rsx! {
        nav { class: "sidebar",
            h1 { "Fine-Tuning Academy" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Lessons {}, "Lessons" } }
                li { Link { to: Route::Evaluation {}, "Evaluation" } }
                li { Link { to: Route::About {}, "About" } }
                li { Link { to: Route::Deploy {}, "Deploy" } }
            }
            section { class: "sidebar-progress",
                h2 { "📊 Your Progress" }
                p { class: "metric", "Lessons Completed: {progress.completed_label}" }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "{progress.fill_style}" }
                }
            }
        }
    }
}
