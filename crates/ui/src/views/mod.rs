mod about;
mod deploy;
mod evaluation;
mod home;
mod lessons;
mod state;

pub use about::AboutView;
pub use deploy::DeployView;
pub use evaluation::EvaluationView;
pub use home::HomeView;
pub use lessons::{LessonCard, LessonsView};
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
