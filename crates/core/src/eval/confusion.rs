use std::collections::BTreeSet;

use super::{MetricsError, check_lengths};

/// Square count matrix: rows are true labels, columns are predicted labels.
///
/// Sized by the distinct labels seen in either input, in ascending order.
/// Lookups take label values; `rows()` is positional and lines up with
/// `labels()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionMatrix {
    labels: Vec<usize>,
    counts: Vec<Vec<u64>>,
}

impl ConfusionMatrix {
    /// Count (true, predicted) label pairs.
    ///
    /// # Errors
    ///
    /// Returns `MetricsError` if the inputs are empty or differ in length.
    pub fn from_labels(y_true: &[usize], y_pred: &[usize]) -> Result<Self, MetricsError> {
        check_lengths(y_true, y_pred)?;

        let labels: Vec<usize> = y_true
            .iter()
            .chain(y_pred.iter())
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let n = labels.len();
        let mut counts = vec![vec![0_u64; n]; n];
        for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
            // Every label was collected above.
            if let (Ok(row), Ok(col)) = (labels.binary_search(&t), labels.binary_search(&p)) {
                counts[row][col] += 1;
            }
        }
        Ok(Self { labels, counts })
    }

    #[must_use]
    pub fn num_classes(&self) -> usize {
        self.labels.len()
    }

    /// Distinct label values, ascending. Position `i` is row and column `i`.
    #[must_use]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Row/column position of a label value, if it occurred.
    #[must_use]
    pub fn position(&self, label: usize) -> Option<usize> {
        self.labels.binary_search(&label).ok()
    }

    #[must_use]
    pub fn get(&self, true_label: usize, predicted: usize) -> u64 {
        match (self.position(true_label), self.position(predicted)) {
            (Some(row), Some(col)) => self.counts[row][col],
            _ => 0,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<u64>] {
        &self.counts
    }

    /// Number of samples whose true label is `class`.
    #[must_use]
    pub fn support(&self, class: usize) -> u64 {
        self.position(class)
            .map_or(0, |row| self.counts[row].iter().sum())
    }

    /// Number of samples predicted as `class`.
    #[must_use]
    pub fn predicted(&self, class: usize) -> u64 {
        self.position(class)
            .map_or(0, |col| self.counts.iter().map(|row| row[col]).sum())
    }

    #[must_use]
    pub fn true_positives(&self, class: usize) -> u64 {
        self.get(class, class)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Sum of the diagonal.
    #[must_use]
    pub fn correct(&self) -> u64 {
        self.counts.iter().enumerate().map(|(i, row)| row[i]).sum()
    }

    /// Largest single cell, used to scale heatmaps.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }
}
