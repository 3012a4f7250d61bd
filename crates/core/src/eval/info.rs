use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

const RULE_WIDTH: usize = 60;

fn rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))
}

/// `1234567` → `1,234,567`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parameter counts of a loaded model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_type: String,
    pub total_params: u64,
    pub trainable_params: u64,
}

impl ModelInfo {
    #[must_use]
    pub fn non_trainable_params(&self) -> u64 {
        self.total_params.saturating_sub(self.trainable_params)
    }

    /// Size in MiB assuming 32-bit weights.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_mb(&self) -> f64 {
        self.total_params as f64 * 4.0 / 1024.0 / 1024.0
    }
}

impl fmt::Display for ModelInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        rule(f)?;
        writeln!(f, "MODEL INFORMATION")?;
        rule(f)?;
        writeln!(f, "Model type: {}", self.model_type)?;
        writeln!(f, "Total parameters: {}", group_thousands(self.total_params))?;
        writeln!(
            f,
            "Trainable parameters: {}",
            group_thousands(self.trainable_params)
        )?;
        writeln!(
            f,
            "Non-trainable parameters: {}",
            group_thousands(self.non_trainable_params())
        )?;
        writeln!(f, "Model size (MB): {:.2}", self.size_mb())?;
        write!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelCount {
    pub label: usize,
    pub count: usize,
    pub percent: f64,
}

/// Size, columns and label balance of a dataset split.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetInfo {
    pub num_examples: usize,
    pub features: Vec<String>,
    pub label_distribution: Vec<LabelCount>,
}

impl DatasetInfo {
    /// Summarize a split. `labels` is `None` when the split has no label
    /// column; otherwise it must hold one label per example.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(num_examples: usize, features: Vec<String>, labels: Option<&[usize]>) -> Self {
        let label_distribution = labels
            .filter(|labels| !labels.is_empty())
            .map(|labels| {
                let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
                for &label in labels {
                    *counts.entry(label).or_default() += 1;
                }
                counts
                    .into_iter()
                    .map(|(label, count)| LabelCount {
                        label,
                        count,
                        percent: count as f64 / labels.len() as f64 * 100.0,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            num_examples,
            features,
            label_distribution,
        }
    }
}

impl fmt::Display for DatasetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        rule(f)?;
        writeln!(f, "DATASET INFORMATION")?;
        rule(f)?;
        writeln!(f, "Number of examples: {}", self.num_examples)?;
        writeln!(f, "Features: [{}]", self.features.join(", "))?;
        if !self.label_distribution.is_empty() {
            writeln!(f)?;
            writeln!(f, "Label distribution:")?;
            for entry in &self.label_distribution {
                writeln!(
                    f,
                    "  Label {}: {} ({:.1}%)",
                    entry.label, entry.count, entry.percent
                )?;
            }
        }
        write!(f, "{}", "=".repeat(RULE_WIDTH))
    }
}
