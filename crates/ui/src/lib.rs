#![allow(non_snake_case)]

pub mod app;
pub mod charts;
pub mod context;
pub mod platform;
pub mod routes;
pub mod vm;
pub mod views;

pub use app::App;
pub use charts::{render_confusion_svg, render_curves_svg};
pub use context::{AppContext, ProgressRevision, UiApp, build_app_context};
pub use platform::{DesktopLinkOpener, LinkOpenerRef, UiLinkOpener};
