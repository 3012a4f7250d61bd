use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

use crate::model::ids::{LessonId, ParseIdError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("invalid lesson id: {0}")]
    InvalidId(#[from] ParseIdError),

    #[error("lesson {id} has an empty title")]
    EmptyTitle { id: LessonId },

    #[error("lesson {id} has an invalid link: {reason}")]
    InvalidLink { id: LessonId, reason: String },

    #[error("lesson {id} is available but has no link")]
    MissingLink { id: LessonId },
}

/// Error returned when a persisted status string is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown lesson status: {raw}")]
pub struct ParseStatusError {
    pub raw: String,
}

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Learner-facing progress of a single lesson.
///
/// Serialized as `not_started`, `in_progress` or `completed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl LessonStatus {
    pub const ALL: [LessonStatus; 3] = [
        LessonStatus::NotStarted,
        LessonStatus::InProgress,
        LessonStatus::Completed,
    ];

    /// Persisted string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LessonStatus::NotStarted => "not_started",
            LessonStatus::InProgress => "in_progress",
            LessonStatus::Completed => "completed",
        }
    }

    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, LessonStatus::Completed)
    }
}

impl fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LessonStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LessonStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| ParseStatusError { raw: s.to_owned() })
    }
}

/// Authoring state of a lesson: published, or announced but not written yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    ComingSoon,
}

impl Availability {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::ComingSoon => "Coming Soon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    SuperBeginner,
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::SuperBeginner => "Super Beginner",
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// Unvalidated lesson metadata as authored in the catalog.
///
/// An empty `link` means the notebook has not been published yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonDraft {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub icon: String,
    pub link: String,
    pub availability: Availability,
    pub featured: bool,
}

impl LessonDraft {
    /// Validate the draft into an immutable `Lesson`.
    ///
    /// # Errors
    ///
    /// Returns `LessonError` if the id or title is empty, the link is not a
    /// valid URL, or an available lesson has no link.
    pub fn validate(self) -> Result<Lesson, LessonError> {
        let id = LessonId::new(self.id)?;

        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(LessonError::EmptyTitle { id });
        }

        let link = match self.link.trim() {
            "" => None,
            raw => Some(Url::parse(raw).map_err(|err| LessonError::InvalidLink {
                id: id.clone(),
                reason: err.to_string(),
            })?),
        };

        if self.availability == Availability::Available && link.is_none() {
            return Err(LessonError::MissingLink { id });
        }

        Ok(Lesson {
            id,
            title,
            duration: self.duration.trim().to_owned(),
            difficulty: self.difficulty,
            description: self.description.trim().to_owned(),
            icon: self.icon,
            link,
            availability: self.availability,
            featured: self.featured,
        })
    }
}

/// One unit of external educational content (a hosted notebook).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    duration: String,
    difficulty: Difficulty,
    description: String,
    icon: String,
    link: Option<Url>,
    availability: Availability,
    featured: bool,
}

impl Lesson {
    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn link(&self) -> Option<&Url> {
        self.link.as_ref()
    }

    #[must_use]
    pub fn availability(&self) -> Availability {
        self.availability
    }

    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.featured
    }

    /// Whether the external notebook link is populated.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.link.is_some()
    }
}
