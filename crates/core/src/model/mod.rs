mod ids;
mod lesson;
mod module;
mod progress;

pub use ids::{LessonId, ParseIdError};

pub use lesson::{
    Availability, Difficulty, Lesson, LessonDraft, LessonError, LessonStatus, ParseStatusError,
};
pub use module::{Module, ModuleDraft};
pub use progress::{ProgressMap, ProgressSummary};
