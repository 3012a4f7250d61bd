use crate::model::lesson::{Lesson, LessonDraft, LessonError};

/// Unvalidated module metadata as authored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDraft {
    pub key: String,
    pub title: String,
    pub emoji: String,
    pub subtitle: String,
    pub duration: String,
    pub lessons: Vec<LessonDraft>,
}

impl ModuleDraft {
    /// Validate every lesson, preserving authored order.
    ///
    /// # Errors
    ///
    /// Returns the first `LessonError` encountered.
    pub fn validate(self) -> Result<Module, LessonError> {
        let lessons = self
            .lessons
            .into_iter()
            .map(LessonDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Module {
            key: self.key,
            title: self.title,
            emoji: self.emoji,
            subtitle: self.subtitle,
            duration: self.duration,
            lessons,
        })
    }
}

/// An ordered group of lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    key: String,
    title: String,
    emoji: String,
    subtitle: String,
    duration: String,
    lessons: Vec<Lesson>,
}

impl Module {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }
}
