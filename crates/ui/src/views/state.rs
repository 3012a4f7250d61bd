use dioxus::prelude::*;
use services::{EvaluationError, ProgressServiceError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    SaveFailed,
    NoReport,
    ReportUnreadable,
    ClassifierUnavailable,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::SaveFailed => "Could not save your progress. Please try again.",
            ViewError::NoReport => {
                "No evaluation report configured. Start the app with --report <file> or set ACADEMY_REPORT_FILE."
            }
            ViewError::ReportUnreadable => {
                "The evaluation report could not be read. Check the file and try again."
            }
            ViewError::ClassifierUnavailable => "The classifier could not be reached.",
        }
    }
}

impl From<&EvaluationError> for ViewError {
    fn from(err: &EvaluationError) -> Self {
        match err {
            EvaluationError::NoReport => ViewError::NoReport,
            EvaluationError::Io { .. }
            | EvaluationError::Parse { .. }
            | EvaluationError::Metrics(_) => ViewError::ReportUnreadable,
            EvaluationError::Classifier(_) => ViewError::ClassifierUnavailable,
            _ => ViewError::Unknown,
        }
    }
}

impl From<&ProgressServiceError> for ViewError {
    fn from(err: &ProgressServiceError) -> Self {
        match err {
            ProgressServiceError::Storage(_) => ViewError::SaveFailed,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
