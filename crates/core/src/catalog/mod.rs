//! The fixed lesson curriculum and its single filter axis.

mod builtin;

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Availability, Lesson, LessonError, LessonId, Module, ModuleDraft};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Lesson(#[from] LessonError),

    #[error("duplicate lesson id: {0}")]
    DuplicateLesson(LessonId),

    #[error("module {key} has an empty title")]
    EmptyModuleTitle { key: String },
}

/// Which lessons to show, by authored availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CatalogFilter {
    #[default]
    All,
    Available,
    ComingSoon,
}

impl CatalogFilter {
    pub const ALL: [CatalogFilter; 3] = [
        CatalogFilter::All,
        CatalogFilter::Available,
        CatalogFilter::ComingSoon,
    ];

    #[must_use]
    pub fn matches(self, availability: Availability) -> bool {
        match self {
            CatalogFilter::All => true,
            CatalogFilter::Available => availability == Availability::Available,
            CatalogFilter::ComingSoon => availability == Availability::ComingSoon,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CatalogFilter::All => "All",
            CatalogFilter::Available => "Available",
            CatalogFilter::ComingSoon => "Coming Soon",
        }
    }
}

/// Immutable tree of modules → lessons in authored order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    modules: Vec<Module>,
}

impl Catalog {
    /// Validate authored modules into a catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a lesson fails validation, a module title is
    /// empty, or two lessons share an id.
    pub fn from_drafts(drafts: Vec<ModuleDraft>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut modules = Vec::with_capacity(drafts.len());

        for draft in drafts {
            if draft.title.trim().is_empty() {
                return Err(CatalogError::EmptyModuleTitle { key: draft.key });
            }
            let module = draft.validate()?;
            for lesson in module.lessons() {
                if !seen.insert(lesson.id().clone()) {
                    return Err(CatalogError::DuplicateLesson(lesson.id().clone()));
                }
            }
            modules.push(module);
        }

        Ok(Self { modules })
    }

    /// The five-module fine-tuning curriculum shipped with the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the authored content is inconsistent.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_drafts(builtin::modules())
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.modules.iter().flat_map(Module::lessons)
    }

    pub fn lesson_ids(&self) -> impl Iterator<Item = &LessonId> {
        self.lessons().map(Lesson::id)
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.lessons().count()
    }

    #[must_use]
    pub fn lesson(&self, id: &LessonId) -> Option<&Lesson> {
        self.lessons().find(|lesson| lesson.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &LessonId) -> bool {
        self.lesson(id).is_some()
    }

    pub fn featured(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons().filter(|lesson| lesson.is_featured())
    }

    pub fn filtered(&self, filter: CatalogFilter) -> impl Iterator<Item = &Lesson> {
        self.lessons()
            .filter(move |lesson| filter.matches(lesson.availability()))
    }
}
