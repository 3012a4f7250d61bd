use academy_core::catalog::CatalogFilter;
use academy_core::model::{Availability, LessonStatus};
use services::{CatalogView, LessonEntry, ModuleSection};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub meta: String,
    pub description: String,
    pub badge: &'static str,
    pub badge_class: &'static str,
    pub status_glyph: &'static str,
    pub status_class: &'static str,
    pub link: Option<String>,
    pub can_start: bool,
    pub completed: bool,
    pub featured: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleSectionVm {
    pub key: String,
    pub heading: String,
    pub subtitle: String,
    pub meta: String,
    pub lessons: Vec<LessonCardVm>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterTabVm {
    pub filter: CatalogFilter,
    pub label: &'static str,
    pub active: bool,
}

#[must_use]
pub fn map_lesson_card(entry: &LessonEntry) -> LessonCardVm {
    LessonCardVm {
        id: entry.id.to_string(),
        title: entry.title.clone(),
        icon: entry.icon.clone(),
        meta: format!("{} · {}", entry.duration, entry.difficulty),
        description: entry.description.clone(),
        badge: entry.badge(),
        badge_class: match entry.availability {
            Availability::Available => "badge badge-ready",
            Availability::ComingSoon => "badge badge-soon",
        },
        status_glyph: entry.status_glyph(),
        status_class: match entry.status {
            LessonStatus::Completed => "lesson lesson-completed",
            LessonStatus::InProgress => "lesson lesson-in-progress",
            LessonStatus::NotStarted => "lesson",
        },
        link: entry.link.clone(),
        can_start: entry.can_start(),
        completed: entry.status.is_completed(),
        featured: entry.featured,
    }
}

fn map_section(section: &ModuleSection) -> ModuleSectionVm {
    ModuleSectionVm {
        key: section.key.clone(),
        heading: section.title.clone(),
        subtitle: section.subtitle.clone(),
        meta: format!(
            "{} {} · {}/{} done",
            section.emoji, section.duration, section.completed, section.total
        ),
        lessons: section.lessons.iter().map(map_lesson_card).collect(),
    }
}

#[must_use]
pub fn map_catalog(view: &CatalogView) -> Vec<ModuleSectionVm> {
    view.sections.iter().map(map_section).collect()
}

#[must_use]
pub fn filter_tabs(active: CatalogFilter) -> Vec<FilterTabVm> {
    CatalogFilter::ALL
        .into_iter()
        .map(|filter| FilterTabVm {
            filter,
            label: filter.label(),
            active: filter == active,
        })
        .collect()
}
