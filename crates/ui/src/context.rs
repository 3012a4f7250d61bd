use std::sync::Arc;

use dioxus::prelude::*;
use services::{CatalogService, EvaluationService, ProgressService};

use crate::platform::LinkOpenerRef;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<CatalogService>;
    fn progress(&self) -> Arc<ProgressService>;
    fn evaluation(&self) -> Arc<EvaluationService>;
    fn link_opener(&self) -> LinkOpenerRef;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<CatalogService>,
    progress: Arc<ProgressService>,
    evaluation: Arc<EvaluationService>,
    links: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            progress: app.progress(),
            evaluation: app.evaluation(),
            links: app.link_opener(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn evaluation(&self) -> Arc<EvaluationService> {
        Arc::clone(&self.evaluation)
    }

    pub fn open_link(&self, url: &str) {
        self.links.open_url(url);
    }
}

/// Counter bumped after every persisted progress change.
///
/// Components that render progress read it so they re-render when a lesson
/// is toggled elsewhere (the sidebar summary, for example).
#[derive(Clone, Copy, PartialEq)]
pub struct ProgressRevision(Signal<u64>);

impl ProgressRevision {
    #[must_use]
    pub fn new(signal: Signal<u64>) -> Self {
        Self(signal)
    }

    /// Current revision; subscribes the calling component.
    #[must_use]
    pub fn get(&self) -> u64 {
        (self.0)()
    }

    pub fn bump(&self) {
        let mut signal = self.0;
        let next = *signal.peek() + 1;
        signal.set(next);
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
