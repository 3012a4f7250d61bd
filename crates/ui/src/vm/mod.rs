mod chart_vm;
mod lesson_vm;
mod markdown_vm;
mod metrics_vm;
mod progress_vm;

pub use chart_vm::{
    ChartVm, CurvesVm, HeatmapCellVm, HeatmapVm, SeriesVm, curves_vm, heat_color, heatmap_vm,
};
pub use lesson_vm::{
    FilterTabVm, LessonCardVm, ModuleSectionVm, filter_tabs, map_catalog, map_lesson_card,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use metrics_vm::{EvaluationVm, MetricCardVm, MisclassifiedVm, map_evaluation};
pub use progress_vm::ProgressVm;
