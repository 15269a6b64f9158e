//! Catalog types: courses, modules, lessons and their aggregates.
//!
//! A course owns its modules and a module owns its lessons. Records are
//! immutable after creation except for the one-way draft-to-published
//! transition on `Course`.

use serde::{Deserialize, Serialize};

use crate::{AccountId, CourseId, LessonId, ModuleId, User};

/// A course in the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Sequential course id.
    pub id: CourseId,

    /// The mentor account that owns this course.
    pub mentor_id: AccountId,

    /// Course title.
    pub title: String,

    /// Long-form description.
    pub description: String,

    /// Difficulty level, free text (e.g. "beginner").
    pub level: String,

    /// Expected duration, free text (e.g. "1 month").
    pub duration: String,

    /// Category, free text (e.g. "web development").
    pub category: String,

    /// Tags, in the order the mentor listed them.
    pub tags: Vec<String>,

    /// Price in the smallest payment unit.
    pub price: u128,

    /// Cover picture URL.
    pub picture: String,

    /// Whether the content was AI-assisted.
    pub with_ai: bool,

    /// Publication state.
    pub status: CourseStatus,

    /// Creation timestamp, caller-supplied milliseconds.
    pub created_at: u64,

    /// Publication timestamp. Absent until the course is published.
    pub published_at: Option<u64>,
}

impl Course {
    /// Whether students may enroll.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status == CourseStatus::Published
    }

    /// Whether the given account owns this course.
    #[must_use]
    pub fn is_owned_by(&self, account_id: &AccountId) -> bool {
        &self.mentor_id == account_id
    }
}

/// Publication state of a course.
///
/// The only transition is `Draft` to `Published`; there is no unpublish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    /// Initial state. Invisible to students, not enrollable.
    Draft,

    /// Visible and enrollable. Terminal.
    Published,
}

/// Fields submitted to `create_course`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourse {
    /// Course title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Difficulty level.
    pub level: String,
    /// Expected duration.
    pub duration: String,
    /// Category.
    pub category: String,
    /// Tags, ordered.
    pub tags: Vec<String>,
    /// Price in the smallest payment unit.
    pub price: u128,
    /// Cover picture URL.
    pub picture: String,
    /// Whether the content was AI-assisted.
    pub with_ai: bool,
    /// Creation timestamp, caller-supplied milliseconds.
    pub created_at: u64,
}

impl NewCourse {
    /// Build the stored record. New courses always start as drafts.
    #[must_use]
    pub fn into_course(self, id: CourseId, mentor_id: AccountId) -> Course {
        Course {
            id,
            mentor_id,
            title: self.title,
            description: self.description,
            level: self.level,
            duration: self.duration,
            category: self.category,
            tags: self.tags,
            price: self.price,
            picture: self.picture,
            with_ai: self.with_ai,
            status: CourseStatus::Draft,
            created_at: self.created_at,
            published_at: None,
        }
    }
}

/// A module within a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Sequential module id.
    pub id: ModuleId,

    /// The course this module belongs to.
    pub course_id: CourseId,

    /// Module title.
    pub title: String,

    /// Description.
    pub description: String,

    /// Authoring status, free text (e.g. "created").
    pub status: String,

    /// Display position within the course. Not required to be unique.
    pub order: u64,

    /// Whether the content was AI-assisted.
    pub with_ai: bool,

    /// Creation timestamp, caller-supplied milliseconds.
    pub created_at: u64,
}

/// Fields submitted to `create_module`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewModule {
    /// Module title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Authoring status.
    pub status: String,
    /// Display position within the course.
    pub order: u64,
    /// Whether the content was AI-assisted.
    pub with_ai: bool,
    /// Creation timestamp, caller-supplied milliseconds.
    pub created_at: u64,
}

impl NewModule {
    /// Build the stored record.
    #[must_use]
    pub fn into_module(self, id: ModuleId, course_id: CourseId) -> Module {
        Module {
            id,
            course_id,
            title: self.title,
            description: self.description,
            status: self.status,
            order: self.order,
            with_ai: self.with_ai,
            created_at: self.created_at,
        }
    }
}

/// A lesson within a module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    /// Sequential lesson id.
    pub id: LessonId,

    /// The module this lesson belongs to.
    pub module_id: ModuleId,

    /// Lesson title.
    pub title: String,

    /// Description.
    pub description: String,

    /// Display position within the module.
    pub order: u64,

    /// Video content, stored by URL only.
    pub video_url: String,

    /// Article content, free text, unbounded.
    pub article: String,

    /// Whether the content was AI-assisted.
    pub with_ai: bool,

    /// Creation timestamp, caller-supplied milliseconds.
    pub created_at: u64,
}

/// Fields submitted to `create_lesson`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLesson {
    /// Lesson title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Display position within the module.
    pub order: u64,
    /// Video content URL.
    pub video_url: String,
    /// Article content.
    pub article: String,
    /// Whether the content was AI-assisted.
    pub with_ai: bool,
    /// Creation timestamp, caller-supplied milliseconds.
    pub created_at: u64,
}

impl NewLesson {
    /// Build the stored record.
    #[must_use]
    pub fn into_lesson(self, id: LessonId, module_id: ModuleId) -> Lesson {
        Lesson {
            id,
            module_id,
            title: self.title,
            description: self.description,
            order: self.order,
            video_url: self.video_url,
            article: self.article,
            with_ai: self.with_ai,
            created_at: self.created_at,
        }
    }
}

/// A course joined with its mentor and full module/lesson hierarchy.
///
/// Modules and lessons are ordered by (`order` ascending, id ascending) so
/// the aggregate is deterministic even when positions collide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullCourse {
    /// The course record.
    pub course: Course,

    /// The owning mentor's profile.
    pub mentor: User,

    /// All modules of the course, ordered.
    pub modules: Vec<FullModule>,
}

/// A module joined with its lessons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullModule {
    /// The module record.
    pub module: Module,

    /// All lessons of the module, ordered by (`order`, id).
    pub lessons: Vec<Lesson>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_course() -> NewCourse {
        NewCourse {
            title: "React From Scratch".into(),
            description: "React course".into(),
            level: "beginner".into(),
            duration: "1 month".into(),
            category: "web development".into(),
            tags: vec!["React".into(), "JavaScript".into()],
            price: 6,
            picture: String::new(),
            with_ai: false,
            created_at: 1,
        }
    }

    #[test]
    fn new_course_starts_as_draft() {
        let mentor = AccountId::new("ayoub").unwrap();
        let course = new_course().into_course(CourseId::ZERO, mentor.clone());
        assert_eq!(course.status, CourseStatus::Draft);
        assert!(!course.is_published());
        assert!(course.published_at.is_none());
        assert!(course.is_owned_by(&mentor));
    }

    #[test]
    fn ownership_check_rejects_other_accounts() {
        let course = new_course().into_course(CourseId::ZERO, AccountId::new("ayoub").unwrap());
        assert!(!course.is_owned_by(&AccountId::new("ahmed").unwrap()));
    }

    #[test]
    fn course_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&CourseStatus::Draft).unwrap(),
            "\"draft\""
        );
        assert_eq!(
            serde_json::to_string(&CourseStatus::Published).unwrap(),
            "\"published\""
        );
    }
}
