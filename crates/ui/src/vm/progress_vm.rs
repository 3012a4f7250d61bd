use academy_core::model::ProgressSummary;

/// Sidebar/home progress metric.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub completed: usize,
    pub in_progress: usize,
    pub total: usize,
    pub completed_label: String,
    pub percent_label: String,
    pub fill_style: String,
}

impl ProgressVm {
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_summary(summary: ProgressSummary) -> Self {
        let percent = summary.percent_complete().round().clamp(0.0, 100.0) as u32;
        Self {
            completed: summary.completed,
            in_progress: summary.in_progress,
            total: summary.total,
            completed_label: format!("{}/{}", summary.completed, summary.total),
            percent_label: format!("{percent}%"),
            fill_style: format!("width: {percent}%;"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_percent() {
        let vm = ProgressVm::from_summary(ProgressSummary {
            completed: 1,
            in_progress: 2,
            total: 3,
        });
        assert_eq!(vm.completed_label, "1/3");
        assert_eq!(vm.percent_label, "33%");
        assert_eq!(vm.fill_style, "width: 33%;");
    }

    #[test]
    fn empty_summary_is_zero_percent() {
        let vm = ProgressVm::from_summary(ProgressSummary::default());
        assert_eq!(vm.percent_label, "0%");
    }
}
