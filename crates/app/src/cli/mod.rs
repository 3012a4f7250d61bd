//! Command line surface of the `app` binary.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use services::config::{
    CLASSIFIER_LABELS_ENV, CLASSIFIER_TOKEN_ENV, CLASSIFIER_URL_ENV, PROGRESS_FILE_ENV,
    REPORT_FILE_ENV,
};
use services::{AppConfig, AppServices, ClassifierConfig, Clock};
use storage::json::DEFAULT_PROGRESS_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "app",
    version,
    about = "Fine-tuning course dashboard with progress tracking and evaluation tools."
)]
pub struct Cli {
    /// JSON file holding lesson progress.
    #[arg(long, global = true, env = PROGRESS_FILE_ENV, default_value = DEFAULT_PROGRESS_PATH)]
    pub progress_file: PathBuf,

    /// Saved evaluation report (JSON with y_true, y_pred and optional texts and logs).
    #[arg(long, global = true, env = REPORT_FILE_ENV)]
    pub report: Option<PathBuf>,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    /// Subcommand to run; opens the dashboard when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Remote inference endpoint used by `predict`.
#[derive(Args, Debug, Default)]
pub struct ClassifierArgs {
    #[arg(long, global = true, env = CLASSIFIER_URL_ENV)]
    pub classifier_url: Option<String>,

    #[arg(long, global = true, env = CLASSIFIER_TOKEN_ENV, hide_env_values = true)]
    pub classifier_token: Option<String>,

    /// Comma-separated label names in class-index order.
    #[arg(long, global = true, env = CLASSIFIER_LABELS_ENV)]
    pub classifier_labels: Option<String>,
}

impl ClassifierArgs {
    fn config(&self) -> Option<ClassifierConfig> {
        let url = self.classifier_url.as_deref()?;
        ClassifierConfig::from_parts(
            url,
            self.classifier_token.clone(),
            self.classifier_labels.as_deref(),
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the desktop dashboard.
    Ui,
    /// Print the learning path with each lesson's status.
    Progress,
    /// Mark a lesson completed.
    Complete { lesson_id: String },
    /// Mark a lesson in progress (completed lessons stay completed).
    Start { lesson_id: String },
    /// Forget all recorded progress.
    Reset,
    /// Print metrics, the per-class report and misclassified samples for a report.
    Evaluate(EvaluateArgs),
    /// Write a README.md model card next to saved model weights.
    ModelCard(ModelCardArgs),
    /// Classify texts with the configured inference endpoint.
    Predict(PredictArgs),
    /// Estimate how long a fine-tuning run will take.
    Estimate(EstimateArgs),
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Also write confusion-matrix and training-curve SVGs into this directory.
    #[arg(long)]
    pub svg_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ModelCardArgs {
    #[arg(long)]
    pub model_name: String,

    #[arg(long, default_value = "Text Classification")]
    pub task: String,

    /// Directory holding the saved model; the card is written here.
    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    #[arg(required = true, num_args = 1..)]
    pub texts: Vec<String>,

    #[arg(long, default_value_t = 32)]
    pub batch_size: usize,
}

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Training examples per epoch.
    #[arg(long)]
    pub samples: u64,

    #[arg(long, default_value_t = 16)]
    pub batch_size: u64,

    #[arg(long, default_value_t = 3)]
    pub epochs: u64,

    /// Measured or expected training throughput.
    #[arg(long, default_value_t = 10.0)]
    pub samples_per_second: f64,
}

impl Cli {
    fn config(&self) -> AppConfig {
        AppConfig::new(self.progress_file.clone())
            .with_report(self.report.clone())
            .with_classifier(self.classifier.config())
    }

    /// Dispatch the parsed command.
    ///
    /// # Errors
    ///
    /// Returns any service error, annotated with what the command was doing.
    pub async fn run(self) -> Result<()> {
        let config = self.config();
        let services = AppServices::from_config(&config, Clock::default_clock()).await?;

        match self.command.unwrap_or(Command::Ui) {
            Command::Ui => {
                crate::desktop::launch(services);
                Ok(())
            }
            Command::Progress => commands::progress(&services),
            Command::Complete { lesson_id } => commands::complete(&services, &lesson_id).await,
            Command::Start { lesson_id } => commands::start(&services, &lesson_id).await,
            Command::Reset => commands::reset(&services).await,
            Command::Evaluate(args) => {
                commands::evaluate(&services, config.report_path.as_deref(), &args).await
            }
            Command::ModelCard(args) => {
                commands::model_card(&services, config.report_path.as_deref(), &args).await
            }
            Command::Predict(args) => {
                let labels = config
                    .classifier
                    .as_ref()
                    .map(|classifier| classifier.labels.as_slice())
                    .unwrap_or_default();
                commands::predict(&services, labels, &args).await
            }
            Command::Estimate(args) => commands::estimate(&args),
        }
    }
}
