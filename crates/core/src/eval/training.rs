use serde::{Deserialize, Serialize};
use std::fmt;

use super::MetricsError;

/// One record of a trainer's log history.
///
/// Training steps carry `loss`; evaluation steps carry `eval_*` fields.
/// Unknown keys (learning rate, runtime, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingLogEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epoch: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loss: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eval_loss: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eval_accuracy: Option<f64>,
}

/// Loss and accuracy series extracted from a log history, in log order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    pub train_loss: Vec<f64>,
    pub eval_loss: Vec<f64>,
    pub eval_accuracy: Vec<f64>,
}

impl TrainingHistory {
    #[must_use]
    pub fn from_logs(logs: &[TrainingLogEntry]) -> Self {
        Self {
            train_loss: logs.iter().filter_map(|log| log.loss).collect(),
            eval_loss: logs.iter().filter_map(|log| log.eval_loss).collect(),
            eval_accuracy: logs.iter().filter_map(|log| log.eval_accuracy).collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.train_loss.is_empty() && self.eval_loss.is_empty() && self.eval_accuracy.is_empty()
    }

    #[must_use]
    pub fn has_accuracy(&self) -> bool {
        !self.eval_accuracy.is_empty()
    }
}

/// Rough wall-clock estimate for a fine-tuning run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingTimeEstimate {
    pub steps_per_epoch: u64,
    pub total_steps: u64,
    pub seconds: f64,
}

impl TrainingTimeEstimate {
    /// `steps = samples / batch * epochs`; each step takes
    /// `batch / samples_per_second` seconds.
    ///
    /// # Errors
    ///
    /// Returns `MetricsError` if `batch_size` is zero or the throughput is
    /// not positive.
    #[allow(clippy::cast_precision_loss)]
    pub fn estimate(
        num_samples: u64,
        batch_size: u64,
        num_epochs: u64,
        samples_per_second: f64,
    ) -> Result<Self, MetricsError> {
        if batch_size == 0 {
            return Err(MetricsError::ZeroBatchSize);
        }
        if samples_per_second.is_nan() || samples_per_second <= 0.0 {
            return Err(MetricsError::NonPositiveRate);
        }
        let steps_per_epoch = num_samples / batch_size;
        let total_steps = steps_per_epoch * num_epochs;
        let seconds = total_steps as f64 * (batch_size as f64 / samples_per_second);
        Ok(Self {
            steps_per_epoch,
            total_steps,
            seconds,
        })
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn minutes_and_seconds(&self) -> (u64, u64) {
        let whole = self.seconds.max(0.0) as u64;
        (whole / 60, whole % 60)
    }
}

impl fmt::Display for TrainingTimeEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (minutes, seconds) = self.minutes_and_seconds();
        writeln!(
            f,
            "Estimated training time: {minutes} minutes, {seconds} seconds"
        )?;
        write!(f, "(This is a rough estimate. Actual time may vary)")
    }
}
