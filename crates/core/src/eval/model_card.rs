use chrono::NaiveDate;
use std::fmt;

use super::metrics::EvaluationResult;

/// README-style summary of a fine-tuned model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCard {
    pub model_name: String,
    pub task: String,
    pub metrics: EvaluationResult,
    /// Directory the model was saved to; used in the usage snippet.
    pub save_path: String,
    pub generated_on: NaiveDate,
}

impl ModelCard {
    /// Markdown body for `README.md`.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ModelCard {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.metrics;

        writeln!(out, "# {}\n", self.model_name)?;
        writeln!(out, "## Model Description\n")?;
        writeln!(out, "Fine-tuned model for {}.\n", self.task)?;
        writeln!(out, "## Training Details\n")?;
        writeln!(out, "- Base Model: {}", self.model_name)?;
        writeln!(out, "- Task: {}", self.task)?;
        writeln!(out, "- Framework: HuggingFace Transformers")?;
        writeln!(out, "- Card generated: {}\n", self.generated_on.format("%Y-%m-%d"))?;
        writeln!(out, "## Performance\n")?;
        writeln!(out, "| Metric | Score |")?;
        writeln!(out, "|--------|-------|")?;
        writeln!(out, "| Accuracy | {:.4} |", m.accuracy)?;
        writeln!(out, "| Precision | {:.4} |", m.precision)?;
        writeln!(out, "| Recall | {:.4} |", m.recall)?;
        writeln!(out, "| F1 Score | {:.4} |\n", m.f1)?;
        writeln!(out, "## Usage\n")?;
        writeln!(out, "```python")?;
        writeln!(
            out,
            "from transformers import AutoTokenizer, AutoModelForSequenceClassification\n"
        )?;
        writeln!(
            out,
            "tokenizer = AutoTokenizer.from_pretrained(\"{}\")",
            self.save_path
        )?;
        writeln!(
            out,
            "model = AutoModelForSequenceClassification.from_pretrained(\"{}\")\n",
            self.save_path
        )?;
        writeln!(out, "inputs = tokenizer(\"Your text here\", return_tensors=\"pt\")")?;
        writeln!(out, "outputs = model(**inputs)")?;
        writeln!(out, "```\n")?;
        writeln!(out, "## Training Data\n")?;
        writeln!(out, "[Describe your training data here]\n")?;
        writeln!(out, "## Limitations\n")?;
        writeln!(out, "[Describe any limitations or biases]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> ModelCard {
        ModelCard {
            model_name: "distilbert-sentiment".into(),
            task: "sentiment analysis".into(),
            metrics: EvaluationResult {
                accuracy: 0.91234,
                precision: 0.9,
                recall: 0.876_54,
                f1: 0.888_88,
            },
            save_path: "./models/sentiment".into(),
            generated_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    #[test]
    fn renders_four_decimal_table() {
        let md = card().render();
        assert!(md.starts_with("# distilbert-sentiment\n"));
        assert!(md.contains("| Accuracy | 0.9123 |"), "{md}");
        assert!(md.contains("| Precision | 0.9000 |"), "{md}");
        assert!(md.contains("| Recall | 0.8765 |"), "{md}");
        assert!(md.contains("| F1 Score | 0.8889 |"), "{md}");
    }

    #[test]
    fn usage_points_at_save_path() {
        let md = card().render();
        assert!(md.contains("from_pretrained(\"./models/sentiment\")"));
        assert!(md.contains("Card generated: 2024-03-01"));
        assert!(md.contains("Fine-tuned model for sentiment analysis."));
    }
}
