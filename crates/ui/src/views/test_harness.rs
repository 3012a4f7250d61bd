use std::sync::{Arc, Mutex};

use academy_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, CatalogService, EvaluationService, ProgressService};
use storage::repository::Storage;

use crate::context::{ProgressRevision, UiApp, build_app_context};
use crate::platform::{LinkOpenerRef, UiLinkOpener};
use crate::views::{AboutView, DeployView, EvaluationView, HomeView, LessonsView};

/// Remembers every URL the views asked to open.
#[derive(Default)]
pub struct RecordingLinkOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingLinkOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().map(|urls| urls.clone()).unwrap_or_default()
    }
}

impl UiLinkOpener for RecordingLinkOpener {
    fn open_url(&self, url: &str) {
        if let Ok(mut urls) = self.opened.lock() {
            urls.push(url.to_owned());
        }
    }
}

struct TestApp {
    services: AppServices,
    links: Arc<RecordingLinkOpener>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn evaluation(&self) -> Arc<EvaluationService> {
        self.services.evaluation()
    }

    fn link_opener(&self) -> LinkOpenerRef {
        self.links.clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Lessons,
    Evaluation,
    About,
    Deploy,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| ProgressRevision::new(Signal::new(0)));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Lessons => rsx! { LessonsView {} },
        ViewKind::Evaluation => rsx! { EvaluationView {} },
        ViewKind::About => rsx! { AboutView {} },
        ViewKind::Deploy => rsx! { DeployView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub progress: Arc<ProgressService>,
    pub links: Arc<RecordingLinkOpener>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, Storage::in_memory(), None).await
}

pub async fn setup_view_harness_with(
    view: ViewKind,
    storage: Storage,
    evaluation: Option<EvaluationService>,
) -> ViewHarness {
    let mut services = AppServices::with_storage(storage, fixed_clock())
        .await
        .expect("build services");
    if let Some(evaluation) = evaluation {
        services = services.with_evaluation(evaluation);
    }
    let progress = services.progress();
    let links = Arc::new(RecordingLinkOpener::default());

    let app = Arc::new(TestApp {
        services,
        links: Arc::clone(&links),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        progress,
        links,
    }
}
