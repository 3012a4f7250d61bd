use std::env;
use std::path::PathBuf;

use storage::json::DEFAULT_PROGRESS_PATH;
use url::Url;

pub const PROGRESS_FILE_ENV: &str = "ACADEMY_PROGRESS_FILE";
pub const REPORT_FILE_ENV: &str = "ACADEMY_REPORT_FILE";
pub const CLASSIFIER_URL_ENV: &str = "ACADEMY_CLASSIFIER_URL";
pub const CLASSIFIER_TOKEN_ENV: &str = "ACADEMY_CLASSIFIER_TOKEN";
pub const CLASSIFIER_LABELS_ENV: &str = "ACADEMY_CLASSIFIER_LABELS";

/// Inference endpoint used by `HttpClassifier`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub endpoint: Url,
    pub token: Option<String>,
    /// Label names in class-index order, used to map `{label, score}`
    /// responses back to indices.
    pub labels: Vec<String>,
}

impl ClassifierConfig {
    /// Read the classifier settings from the environment.
    ///
    /// Returns `None` when no endpoint is set or it is not a valid URL.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let raw = env::var(CLASSIFIER_URL_ENV).ok()?;
        Self::from_parts(
            &raw,
            env::var(CLASSIFIER_TOKEN_ENV).ok(),
            env::var(CLASSIFIER_LABELS_ENV).ok().as_deref(),
        )
    }

    /// Build a config from raw strings; `labels` is comma separated.
    #[must_use]
    pub fn from_parts(endpoint: &str, token: Option<String>, labels: Option<&str>) -> Option<Self> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return None;
        }
        let endpoint = match Url::parse(endpoint) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(%err, "ignoring invalid {CLASSIFIER_URL_ENV}");
                return None;
            }
        };
        let token = token.filter(|t| !t.trim().is_empty());
        let labels = labels
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|label| !label.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        Some(Self {
            endpoint,
            token,
            labels,
        })
    }
}

/// Resolved runtime settings for the dashboard and CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub progress_path: PathBuf,
    pub report_path: Option<PathBuf>,
    pub classifier: Option<ClassifierConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            progress_path: PathBuf::from(DEFAULT_PROGRESS_PATH),
            report_path: None,
            classifier: None,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn new(progress_path: impl Into<PathBuf>) -> Self {
        Self {
            progress_path: progress_path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_report(mut self, report_path: Option<PathBuf>) -> Self {
        self.report_path = report_path;
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: Option<ClassifierConfig>) -> Self {
        self.classifier = classifier;
        self
    }
}
