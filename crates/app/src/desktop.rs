use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CatalogService, EvaluationService, ProgressService};
use ui::{App, DesktopLinkOpener, LinkOpenerRef, UiApp, build_app_context};

struct DesktopApp {
    services: AppServices,
    links: LinkOpenerRef,
}

impl UiApp for DesktopApp {
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
        Arc::clone(&self.links)
    }
}

/// Open the dashboard window. Blocks until the window is closed.
pub fn launch(services: AppServices) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        links: Arc::new(DesktopLinkOpener),
    });
    let context = build_app_context(&app);

    // Some dev setups default to an always-on-top window; keep it a normal one.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Fine-Tuning Academy")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}
