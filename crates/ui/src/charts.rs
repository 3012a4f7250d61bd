//! SVG chart components, also rendered to standalone files by the CLI.

use dioxus::prelude::*;

use crate::vm::{ChartVm, CurvesVm, HeatmapVm};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[component]
pub fn ConfusionMatrixChart(heatmap: HeatmapVm) -> Element {
    let grid_bottom = heatmap.height - 40.0;
    let grid_mid = heatmap.top + heatmap.labels.len() as f64 * heatmap.cell / 2.0;
    let x_title = heatmap.left + heatmap.labels.len() as f64 * heatmap.cell / 2.0;
    let half = heatmap.cell / 2.0;

    rsx! {
        svg {
            class: "chart heatmap",
            "xmlns": SVG_NS,
            width: heatmap.width,
            height: heatmap.height,
            view_box: "{heatmap.view_box()}",
            text { x: x_title, y: "24", text_anchor: "middle", font_weight: "bold",
                "Confusion Matrix"
            }
            for cell in heatmap.cells.iter() {
                g { key: "{cell.row}-{cell.col}",
                    rect {
                        x: cell.x,
                        y: cell.y,
                        width: heatmap.cell,
                        height: heatmap.cell,
                        fill: "{cell.fill}",
                        stroke: "#ffffff",
                    }
                    text {
                        x: cell.x + half,
                        y: cell.y + half,
                        text_anchor: "middle",
                        dominant_baseline: "middle",
                        fill: "{cell.text_fill}",
                        "{cell.count}"
                    }
                }
            }
            for (i, label) in heatmap.labels.iter().enumerate() {
                g { key: "axis-{i}",
                    text {
                        x: heatmap.left - 8.0,
                        y: heatmap.top + heatmap.axis_center(i),
                        text_anchor: "end",
                        dominant_baseline: "middle",
                        "{label}"
                    }
                    text {
                        x: heatmap.left + heatmap.axis_center(i),
                        y: grid_bottom - 12.0,
                        text_anchor: "middle",
                        "{label}"
                    }
                }
            }
            text { x: x_title, y: grid_bottom + 24.0, text_anchor: "middle", "Predicted Label" }
            text {
                x: "16",
                y: grid_mid,
                text_anchor: "middle",
                transform: "rotate(-90 16 {grid_mid})",
                "True Label"
            }
        }
    }
}

#[component]
fn LineChart(chart: ChartVm) -> Element {
    let bottom = chart.height - chart.pad;
    let right = chart.width - chart.pad;
    let legend_x = right - 150.0;

    rsx! {
        svg {
            class: "chart line-chart",
            "xmlns": SVG_NS,
            width: chart.width,
            height: chart.height,
            view_box: "{chart.view_box()}",
            text { x: chart.width / 2.0, y: "24", text_anchor: "middle", font_weight: "bold",
                "{chart.title}"
            }
            line { x1: chart.pad, y1: bottom, x2: right, y2: bottom, stroke: "#9aa5b1" }
            line { x1: chart.pad, y1: chart.pad, x2: chart.pad, y2: bottom, stroke: "#9aa5b1" }
            text { x: chart.pad - 6.0, y: chart.pad, text_anchor: "end", font_size: "11",
                "{chart.y_max_label()}"
            }
            text { x: chart.pad - 6.0, y: bottom, text_anchor: "end", font_size: "11",
                "{chart.y_min_label()}"
            }
            text { x: chart.width / 2.0, y: chart.height - 12.0, text_anchor: "middle", "Step" }
            for (i, series) in chart.series.iter().enumerate() {
                g { key: "{series.name}",
                    polyline {
                        points: "{series.points}",
                        fill: "none",
                        stroke: "{series.color}",
                        stroke_width: "2",
                    }
                    for (j, (x, y)) in series.markers.iter().enumerate() {
                        circle { key: "{j}", cx: *x, cy: *y, r: "3", fill: "{series.color}" }
                    }
                    rect {
                        x: legend_x,
                        y: chart.pad + 4.0 + i as f64 * 18.0,
                        width: "12",
                        height: "12",
                        fill: "{series.color}",
                    }
                    text {
                        x: legend_x + 18.0,
                        y: chart.pad + 14.0 + i as f64 * 18.0,
                        font_size: "12",
                        "{series.name}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn TrainingCurvesChart(curves: CurvesVm) -> Element {
    rsx! {
        div { class: "curves",
            LineChart { chart: curves.loss.clone() }
            if let Some(accuracy) = curves.accuracy.clone() {
                LineChart { chart: accuracy }
            }
        }
    }
}

/// Standalone SVG document for a confusion-matrix heatmap.
#[must_use]
pub fn render_confusion_svg(heatmap: &HeatmapVm) -> String {
    dioxus_ssr::render_element(rsx! {
        ConfusionMatrixChart { heatmap: heatmap.clone() }
    })
}

/// Standalone SVG documents for the loss chart and, when present, the
/// accuracy chart.
#[must_use]
pub fn render_curves_svg(curves: &CurvesVm) -> Vec<(&'static str, String)> {
    let mut out = vec![(
        "loss",
        dioxus_ssr::render_element(rsx! { LineChart { chart: curves.loss.clone() } }),
    )];
    if let Some(accuracy) = curves.accuracy.clone() {
        out.push((
            "accuracy",
            dioxus_ssr::render_element(rsx! { LineChart { chart: accuracy } }),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::eval::{ConfusionMatrix, TrainingHistory};
    use crate::vm::{curves_vm, heatmap_vm};

    #[test]
    fn confusion_svg_lists_counts_and_labels() {
        let cm = ConfusionMatrix::from_labels(&[0, 1, 1], &[0, 1, 0]).unwrap();
        let svg = render_confusion_svg(&heatmap_vm(&cm, &["neg".into(), "pos".into()]));
        assert!(svg.starts_with("<svg"), "{svg}");
        assert!(svg.contains(SVG_NS), "{svg}");
        assert!(svg.contains("Confusion Matrix"), "{svg}");
        assert!(svg.contains(">pos<"), "{svg}");
        assert!(svg.matches("<rect").count() == 4, "{svg}");
    }

    #[test]
    fn curves_svg_has_one_file_per_chart() {
        let history = TrainingHistory {
            train_loss: vec![0.9, 0.4],
            eval_loss: vec![0.7, 0.5],
            eval_accuracy: vec![0.8, 0.9],
        };
        let files = render_curves_svg(&curves_vm(&history).unwrap());
        let names: Vec<_> = files.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["loss", "accuracy"]);
        assert!(files[0].1.contains("<polyline"), "{}", files[0].1);
        assert!(files[1].1.contains("Validation Accuracy"), "{}", files[1].1);
    }
}
