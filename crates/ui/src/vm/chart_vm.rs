//! Geometry for the SVG charts, kept free of Dioxus so it can be unit tested.

use academy_core::eval::{ConfusionMatrix, TrainingHistory};

const CELL: f64 = 72.0;
const HEATMAP_LEFT: f64 = 120.0;
const HEATMAP_TOP: f64 = 48.0;
const HEATMAP_BOTTOM: f64 = 72.0;

const CHART_WIDTH: f64 = 480.0;
const CHART_HEIGHT: f64 = 300.0;
const CHART_PAD: f64 = 48.0;

const LIGHT: (f64, f64, f64) = (247.0, 251.0, 255.0);
const DARK: (f64, f64, f64) = (8.0, 48.0, 107.0);

#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapCellVm {
    pub row: usize,
    pub col: usize,
    pub count: u64,
    pub x: f64,
    pub y: f64,
    pub fill: String,
    pub text_fill: &'static str,
}

/// Confusion-matrix heatmap: rows are true labels, columns predictions.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapVm {
    pub labels: Vec<String>,
    pub cells: Vec<HeatmapCellVm>,
    pub cell: f64,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl HeatmapVm {
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Centre of row/column `index` along the grid.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn axis_center(&self, index: usize) -> f64 {
        (index as f64 + 0.5) * self.cell
    }
}

/// Blend from near-white to dark blue as `count` approaches `max`.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn heat_color(count: u64, max: u64) -> String {
    let t = if max == 0 {
        0.0
    } else {
        (count as f64 / max as f64).clamp(0.0, 1.0)
    };
    let mix = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        mix(LIGHT.0, DARK.0),
        mix(LIGHT.1, DARK.1),
        mix(LIGHT.2, DARK.2)
    )
}

/// `names` follows the matrix rows; missing names fall back to the label value.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn heatmap_vm(matrix: &ConfusionMatrix, names: &[String]) -> HeatmapVm {
    let n = matrix.num_classes();
    let max = matrix.max_count();
    let labels = matrix
        .labels()
        .iter()
        .enumerate()
        .map(|(i, label)| names.get(i).cloned().unwrap_or_else(|| label.to_string()))
        .collect();

    let mut cells = Vec::with_capacity(n * n);
    for (row, counts) in matrix.rows().iter().enumerate() {
        for (col, &count) in counts.iter().enumerate() {
            cells.push(HeatmapCellVm {
                row,
                col,
                count,
                x: HEATMAP_LEFT + col as f64 * CELL,
                y: HEATMAP_TOP + row as f64 * CELL,
                fill: heat_color(count, max),
                text_fill: if max > 0 && count * 2 > max {
                    "#ffffff"
                } else {
                    "#1f2933"
                },
            });
        }
    }

    let grid = n as f64 * CELL;
    HeatmapVm {
        labels,
        cells,
        cell: CELL,
        left: HEATMAP_LEFT,
        top: HEATMAP_TOP,
        width: HEATMAP_LEFT + grid + 16.0,
        height: HEATMAP_TOP + grid + HEATMAP_BOTTOM,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesVm {
    pub name: &'static str,
    pub color: &'static str,
    /// SVG polyline `points` attribute.
    pub points: String,
    pub markers: Vec<(f64, f64)>,
}

/// One line chart with its own y range.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartVm {
    pub title: &'static str,
    pub y_label: &'static str,
    pub series: Vec<SeriesVm>,
    pub y_min: f64,
    pub y_max: f64,
    pub width: f64,
    pub height: f64,
    pub pad: f64,
}

impl ChartVm {
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    #[must_use]
    pub fn y_max_label(&self) -> String {
        format!("{:.2}", self.y_max)
    }

    #[must_use]
    pub fn y_min_label(&self) -> String {
        format!("{:.2}", self.y_min)
    }
}

/// Loss chart plus an accuracy chart when the log has eval accuracy.
#[derive(Clone, Debug, PartialEq)]
pub struct CurvesVm {
    pub loss: ChartVm,
    pub accuracy: Option<ChartVm>,
}

#[allow(clippy::cast_precision_loss)]
fn plot_series(
    name: &'static str,
    color: &'static str,
    values: &[f64],
    y_min: f64,
    y_max: f64,
) -> SeriesVm {
    let plot_w = CHART_WIDTH - 2.0 * CHART_PAD;
    let plot_h = CHART_HEIGHT - 2.0 * CHART_PAD;
    let span = (y_max - y_min).max(f64::EPSILON);
    let steps = values.len().saturating_sub(1).max(1) as f64;

    let markers: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = CHART_PAD + i as f64 / steps * plot_w;
            let y = CHART_PAD + (1.0 - (v - y_min) / span) * plot_h;
            (x, y)
        })
        .collect();
    let points = markers
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");

    SeriesVm {
        name,
        color,
        points,
        markers,
    }
}

fn range<'a>(all: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    let (lo, hi) = all.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if (hi - lo).abs() < f64::EPSILON {
        return (lo - 0.5, hi + 0.5);
    }
    (lo, hi)
}

type Line<'a> = (&'static str, &'static str, &'a [f64]);

fn chart(title: &'static str, y_label: &'static str, lines: &[Line<'_>]) -> ChartVm {
    let (y_min, y_max) = range(lines.iter().flat_map(|(_, _, values)| values.iter()));
    let series = lines
        .iter()
        .filter(|(_, _, values)| !values.is_empty())
        .map(|&(name, color, values)| plot_series(name, color, values, y_min, y_max))
        .collect();
    ChartVm {
        title,
        y_label,
        series,
        y_min,
        y_max,
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        pad: CHART_PAD,
    }
}

/// `None` when the history holds no losses at all.
#[must_use]
pub fn curves_vm(history: &TrainingHistory) -> Option<CurvesVm> {
    if history.train_loss.is_empty() && history.eval_loss.is_empty() {
        return None;
    }
    let loss = chart(
        "Training and Validation Loss",
        "Loss",
        &[
            ("Training Loss", "#2563eb", history.train_loss.as_slice()),
            ("Validation Loss", "#ea580c", history.eval_loss.as_slice()),
        ],
    );
    let accuracy = history.has_accuracy().then(|| {
        chart(
            "Validation Accuracy",
            "Accuracy",
            &[("Validation Accuracy", "#16a34a", history.eval_accuracy.as_slice())],
        )
    });
    Some(CurvesVm { loss, accuracy })
}
