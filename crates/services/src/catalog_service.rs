use std::sync::Arc;

use academy_core::catalog::{Catalog, CatalogFilter};
use academy_core::model::{
    Availability, Difficulty, Lesson, LessonId, LessonStatus, Module, ProgressMap,
};

/// One lesson as the dashboard shows it, joined with the learner's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonEntry {
    pub id: LessonId,
    pub title: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub description: String,
    pub icon: String,
    pub link: Option<String>,
    pub availability: Availability,
    pub status: LessonStatus,
    pub featured: bool,
}

impl LessonEntry {
    fn new(lesson: &Lesson, status: LessonStatus) -> Self {
        Self {
            id: lesson.id().clone(),
            title: lesson.title().to_owned(),
            duration: lesson.duration().to_owned(),
            difficulty: lesson.difficulty(),
            description: lesson.description().to_owned(),
            icon: lesson.icon().to_owned(),
            link: lesson.link().map(|url| url.as_str().to_owned()),
            availability: lesson.availability(),
            status,
            featured: lesson.is_featured(),
        }
    }

    /// Whether the external notebook link is populated.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.link.is_some()
    }

    /// Published and linked, so a "Start Learning" action makes sense.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.availability == Availability::Available && self.is_reachable()
    }

    #[must_use]
    pub fn badge(&self) -> &'static str {
        match self.availability {
            Availability::Available => "✅ Ready to Learn",
            Availability::ComingSoon => "🔜 Coming Soon",
        }
    }

    #[must_use]
    pub fn status_glyph(&self) -> &'static str {
        match self.status {
            LessonStatus::Completed => "✅",
            LessonStatus::InProgress => "🔵",
            LessonStatus::NotStarted => "⚪",
        }
    }
}

/// A module header plus the lessons that survived the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSection {
    pub key: String,
    pub title: String,
    pub emoji: String,
    pub subtitle: String,
    pub duration: String,
    pub lessons: Vec<LessonEntry>,
    /// Completed lessons across the whole module, ignoring the filter.
    pub completed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub filter: CatalogFilter,
    pub sections: Vec<ModuleSection>,
}

impl CatalogView {
    pub fn lessons(&self) -> impl Iterator<Item = &LessonEntry> {
        self.sections.iter().flat_map(|section| section.lessons.iter())
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.lessons().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Joins the static curriculum with progress for display.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Render the catalog in authored order, keeping only lessons whose
    /// availability matches `filter`. Modules left empty are dropped.
    #[must_use]
    pub fn render(&self, progress: &ProgressMap, filter: CatalogFilter) -> CatalogView {
        let sections = self
            .catalog
            .modules()
            .iter()
            .filter_map(|module| section(module, progress, filter))
            .collect();
        CatalogView { filter, sections }
    }

    #[must_use]
    pub fn featured(&self, progress: &ProgressMap) -> Vec<LessonEntry> {
        self.catalog
            .featured()
            .map(|lesson| LessonEntry::new(lesson, progress.status_of(lesson.id())))
            .collect()
    }

    #[must_use]
    pub fn lesson(&self, id: &LessonId, progress: &ProgressMap) -> Option<LessonEntry> {
        self.catalog
            .lesson(id)
            .map(|lesson| LessonEntry::new(lesson, progress.status_of(id)))
    }
}

fn section(module: &Module, progress: &ProgressMap, filter: CatalogFilter) -> Option<ModuleSection> {
    let lessons: Vec<LessonEntry> = module
        .lessons()
        .iter()
        .filter(|lesson| filter.matches(lesson.availability()))
        .map(|lesson| LessonEntry::new(lesson, progress.status_of(lesson.id())))
        .collect();
    if lessons.is_empty() {
        return None;
    }

    let module_summary = progress.summarize(module.lessons().iter().map(Lesson::id));
    Some(ModuleSection {
        key: module.key().to_owned(),
        title: module.title().to_owned(),
        emoji: module.emoji().to_owned(),
        subtitle: module.subtitle().to_owned(),
        duration: module.duration().to_owned(),
        lessons,
        completed: module_summary.completed,
        total: module_summary.total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(Catalog::builtin().unwrap()))
    }

    fn id(raw: &str) -> LessonId {
        LessonId::new(raw).unwrap()
    }

    #[test]
    fn filter_counts_match_availability() {
        let service = service();
        let progress = ProgressMap::new();
        let all = service.render(&progress, CatalogFilter::All).lesson_count();
        let available = service
            .render(&progress, CatalogFilter::Available)
            .lesson_count();
        let coming = service
            .render(&progress, CatalogFilter::ComingSoon)
            .lesson_count();
        assert_eq!(all, 13);
        assert_eq!(available, 6);
        assert_eq!(coming, all - available);
    }

    #[test]
    fn empty_modules_are_dropped() {
        let view = service().render(&ProgressMap::new(), CatalogFilter::Available);
        let keys: Vec<_> = view.sections.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["module1", "module2"]);
    }

    #[test]
    fn entries_carry_status_and_module_counts() {
        let mut progress = ProgressMap::new();
        progress.mark_complete(id("m1l1"));
        progress.mark_started(id("m1l2"));

        let view = service().render(&progress, CatalogFilter::All);
        let first = &view.sections[0];
        assert_eq!(first.completed, 1);
        assert_eq!(first.total, 3);
        assert_eq!(first.lessons[0].status_glyph(), "✅");
        assert_eq!(first.lessons[1].status_glyph(), "🔵");
        assert_eq!(first.lessons[2].status_glyph(), "⚪");
    }

    #[test]
    fn only_available_linked_lessons_can_start() {
        let service = service();
        let progress = ProgressMap::new();
        let live = service.lesson(&id("m2l1"), &progress).unwrap();
        assert!(live.can_start());
        assert_eq!(live.badge(), "✅ Ready to Learn");

        let upcoming = service.lesson(&id("m3l1"), &progress).unwrap();
        assert!(!upcoming.can_start());
        assert_eq!(upcoming.badge(), "🔜 Coming Soon");
    }

    #[test]
    fn featured_lesson_is_first_fine_tune() {
        let featured = service().featured(&ProgressMap::new());
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id.as_str(), "m2l1");
    }
}
