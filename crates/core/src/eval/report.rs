use std::fmt;

use super::confusion::ConfusionMatrix;
use super::metrics::{accuracy, class_scores, weighted_average};
use super::MetricsError;

const PREVIEW_CHARS: usize = 100;

/// One line of a classification report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: u64,
}

/// Per-class precision/recall/F1 table with accuracy, macro and weighted
/// averages. Only classes present in either label array get a row.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport {
    rows: Vec<ReportRow>,
    accuracy: f64,
    macro_avg: ReportRow,
    weighted_avg: ReportRow,
}

fn class_name(class: usize, names: Option<&[String]>) -> String {
    names
        .and_then(|names| names.get(class))
        .cloned()
        .unwrap_or_else(|| class.to_string())
}

impl ClassificationReport {
    /// Build the report from true and predicted labels.
    ///
    /// `names[i]` labels class `i`; classes without a name fall back to
    /// their index.
    ///
    /// # Errors
    ///
    /// Returns `MetricsError` if the inputs are empty or differ in length.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(
        y_true: &[usize],
        y_pred: &[usize],
        names: Option<&[String]>,
    ) -> Result<Self, MetricsError> {
        let cm = ConfusionMatrix::from_labels(y_true, y_pred)?;
        let scores = class_scores(&cm);

        let rows: Vec<ReportRow> = scores
            .iter()
            .map(|s| ReportRow {
                name: class_name(s.class, names),
                precision: s.precision,
                recall: s.recall,
                f1: s.f1,
                support: s.support,
            })
            .collect();

        let total = cm.total();
        let n = rows.len().max(1) as f64;
        let macro_avg = ReportRow {
            name: "macro avg".into(),
            precision: rows.iter().map(|r| r.precision).sum::<f64>() / n,
            recall: rows.iter().map(|r| r.recall).sum::<f64>() / n,
            f1: rows.iter().map(|r| r.f1).sum::<f64>() / n,
            support: total,
        };
        let (precision, recall, f1) = weighted_average(&scores);
        let weighted_avg = ReportRow {
            name: "weighted avg".into(),
            precision,
            recall,
            f1,
            support: total,
        };

        Ok(Self {
            rows,
            accuracy: accuracy(y_true, y_pred)?,
            macro_avg,
            weighted_avg,
        })
    }

    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    #[must_use]
    pub fn macro_avg(&self) -> &ReportRow {
        &self.macro_avg
    }

    #[must_use]
    pub fn weighted_avg(&self) -> &ReportRow {
        &self.weighted_avg
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|r| r.name.chars().count())
            .chain(std::iter::once(self.weighted_avg.name.len()))
            .max()
            .unwrap_or(0);

        writeln!(
            f,
            "{:>width$} {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        let write_row = |f: &mut fmt::Formatter<'_>, row: &ReportRow| {
            writeln!(
                f,
                "{:>width$} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                row.name, row.precision, row.recall, row.f1, row.support
            )
        };
        for row in &self.rows {
            write_row(f, row)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>width$} {:>9} {:>9} {:>9.2} {:>9}",
            "accuracy", "", "", self.accuracy, self.weighted_avg.support
        )?;
        write_row(f, &self.macro_avg)?;
        write_row(f, &self.weighted_avg)
    }
}

/// A sample the model got wrong, with a shortened text preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misclassified {
    pub index: usize,
    pub preview: String,
    pub true_name: String,
    pub predicted_name: String,
}

impl fmt::Display for Misclassified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Example {}:", self.index)?;
        writeln!(f, "  Text: {}", self.preview)?;
        write!(
            f,
            "  True: {} | Predicted: {}",
            self.true_name, self.predicted_name
        )
    }
}

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    out.push_str("...");
    out
}

/// First `limit` samples whose prediction differs from the true label.
#[must_use]
pub fn misclassified(
    texts: &[String],
    y_true: &[usize],
    y_pred: &[usize],
    names: Option<&[String]>,
    limit: usize,
) -> Vec<Misclassified> {
    texts
        .iter()
        .zip(y_true.iter().zip(y_pred.iter()))
        .enumerate()
        .filter(|(_, (_, (t, p)))| t != p)
        .take(limit)
        .map(|(index, (text, (&t, &p)))| Misclassified {
            index,
            preview: preview(text),
            true_name: class_name(t, names),
            predicted_name: class_name(p, names),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<String> {
        vec!["negative".into(), "positive".into()]
    }

    #[test]
    fn report_rows_use_class_names() {
        let names = names();
        let report =
            ClassificationReport::new(&[0, 0, 1, 1], &[0, 1, 1, 1], Some(names.as_slice()))
                .unwrap();
        assert_eq!(report.rows().len(), 2);
        assert_eq!(report.rows()[0].name, "negative");
        assert_eq!(report.rows()[1].support, 2);
        assert!((report.accuracy() - 0.75).abs() < 1e-9);
        assert!((report.macro_avg().recall - 0.75).abs() < 1e-9);
        assert_eq!(report.weighted_avg().support, 4);
    }

    #[test]
    fn report_lists_only_observed_labels() {
        let report = ClassificationReport::new(&[0, 2], &[0, 2], None).unwrap();
        let labels: Vec<_> = report.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(labels, vec!["0", "2"]);
    }

    #[test]
    fn report_renders_aligned_table() {
        let names = names();
        let text = ClassificationReport::new(&[0, 0, 1, 1], &[0, 1, 1, 1], Some(names.as_slice()))
            .unwrap()
            .to_string();
        assert!(text.contains("precision"));
        assert!(text.contains("    negative      1.00      0.50      0.67         2"));
        assert!(text.contains("    accuracy                          0.75         4"));
        assert!(text.contains("weighted avg      0.83      0.75      0.73         4"));
    }

    #[test]
    fn misclassified_limits_and_previews() {
        let texts: Vec<String> = (0..8).map(|i| format!("text {i}")).collect();
        let y_true = vec![0; 8];
        let y_pred = vec![1; 8];
        let names = names();
        let wrong = misclassified(&texts, &y_true, &y_pred, Some(names.as_slice()), 5);
        assert_eq!(wrong.len(), 5);
        assert_eq!(wrong[0].preview, "text 0...");
        assert_eq!(wrong[4].index, 4);
        assert_eq!(wrong[0].predicted_name, "positive");
    }

    #[test]
    fn preview_truncates_long_text() {
        let long = "x".repeat(250);
        assert_eq!(preview(&long).chars().count(), 103);
    }
}
