//! Integration tests for the course catalog: creation, hierarchy, the full
//! course aggregate and the publish transition.

mod common;

use common::{account, new_course, new_lesson, new_module, TestHarness};
use mentora_core::{CourseId, CourseStatus, ErrorKind, LessonId, MarketError, ModuleId};

#[test]
fn course_ids_are_sequential_from_zero() {
    let harness = TestHarness::new();
    let ayoub = harness.register_mentor("ayoub");

    let first = harness.draft_course(&ayoub, 6);
    let second = harness.draft_course(&ayoub, 10);
    assert_eq!(first.id.value(), 0);
    assert_eq!(second.id.value(), 1);
}

#[test]
fn new_courses_start_as_drafts() {
    let harness = TestHarness::new();
    let ayoub = harness.register_mentor("ayoub");

    let course = harness.draft_course(&ayoub, 6);
    assert_eq!(course.status, CourseStatus::Draft);
    assert!(course.published_at.is_none());
    assert_eq!(course.mentor_id, ayoub);
    assert_eq!(course.price, 6);
}

#[test]
fn only_mentors_create_courses() {
    let harness = TestHarness::new();
    let ahmed = harness.register_student("ahmed");

    let err = harness
        .market
        .create_course(&ahmed, new_course(6))
        .unwrap_err();
    assert!(matches!(err, MarketError::NotAMentor { .. }));
    assert_eq!(err.kind(), ErrorKind::Unauthorized);

    // Unregistered accounts are rejected the same way.
    let err = harness
        .market
        .create_course(&account("ghost"), new_course(6))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[test]
fn failed_creation_consumes_no_id() {
    let harness = TestHarness::new();
    let ayoub = harness.register_mentor("ayoub");
    let ahmed = harness.register_student("ahmed");

    harness
        .market
        .create_course(&ahmed, new_course(6))
        .unwrap_err();

    let course = harness.draft_course(&ayoub, 6);
    assert_eq!(course.id.value(), 0);
}

#[test]
fn modules_and_lessons_attach_to_their_parents() {
    let harness = TestHarness::new();
    let ayoub = harness.register_mentor("ayoub");
    let course = harness.draft_course(&ayoub, 6);

    let module = harness
        .market
        .create_module(&ayoub, course.id, new_module("Basics", 0))
        .unwrap();
    assert_eq!(module.id.value(), 0);
    assert_eq!(module.course_id, course.id);

    let lesson = harness
        .market
        .create_lesson(&ayoub, module.id, new_lesson("Intro", 0))
        .unwrap();
    assert_eq!(lesson.id.value(), 0);
    assert_eq!(lesson.module_id, module.id);

    assert_eq!(
        harness.market.get_module_by_id(module.id).unwrap().title,
        "Basics"
    );
    assert_eq!(
        harness.market.get_lesson_by_id(lesson.id).unwrap().title,
        "Intro"
    );
}

#[test]
fn only_the_owner_extends_a_course() {
    let harness = TestHarness::new();
    let ayoub = harness.register_mentor("ayoub");
    let sara = harness.register_mentor("sara");
    let course = harness.draft_course(&ayoub, 6);
    let module = harness
        .market
        .create_module(&ayoub, course.id, new_module("Basics", 0))
        .unwrap();

    let err = harness
        .market
        .create_module(&sara, course.id, new_module("Hijack", 1))
        .unwrap_err();
    assert!(matches!(err, MarketError::NotCourseOwner { .. }));
    assert_eq!(err.kind(), ErrorKind::Unauthorized);

    let err = harness
        .market
        .create_lesson(&sara, module.id, new_lesson("Hijack", 0))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[test]
fn module_under_unknown_course_is_not_found() {
    let harness = TestHarness::new();
    let ayoub = harness.register_mentor("ayoub");

    let err = harness
        .market
        .create_module(&ayoub, CourseId::new(99), new_module("Basics", 0))
        .unwrap_err();
    assert!(matches!(err, MarketError::CourseNotFound { course_id: 99 }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn lesson_under_unknown_module_is_not_found() {
    let harness = TestHarness::new();
    let ayoub = harness.register_mentor("ayoub");

    let err = harness
        .market
        .create_lesson(&ayoub, ModuleId::new(99), new_lesson("Intro", 0))
        .unwrap_err();
    assert!(matches!(err, MarketError::ModuleNotFound { module_id: 99 }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn unknown_module_and_lesson_lookups_are_not_found() {
    let harness = TestHarness::new();

    let err = harness
        .market
        .get_module_by_id(ModuleId::new(7))
        .unwrap_err();
    assert!(matches!(err, MarketError::ModuleNotFound { module_id: 7 }));
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = harness
        .market
        .get_lesson_by_id(LessonId::new(7))
        .unwrap_err();
    assert!(matches!(err, MarketError::LessonNotFound { lesson_id: 7 }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn full_course_joins_mentor_modules_and_lessons() {
    let harness = TestHarness::new();
    let ayoub = harness.register_mentor("ayoub");
    let course = harness.draft_course(&ayoub, 6);

    // Created out of display order on purpose.
    let advanced = harness
        .market
        .create_module(&ayoub, course.id, new_module("Advanced", 1))
        .unwrap();
    let basics = harness
        .market
        .create_module(&ayoub, course.id, new_module("Basics", 0))
        .unwrap();
    harness
        .market
        .create_lesson(&ayoub, basics.id, new_lesson("Setup", 1))
        .unwrap();
    harness
        .market
        .create_lesson(&ayoub, basics.id, new_lesson("Intro", 0))
        .unwrap();

    let full = harness.market.get_full_course(course.id).unwrap();
    assert_eq!(full.course.id, course.id);
    assert_eq!(full.mentor.account_id, ayoub);
    assert_eq!(full.modules.len(), 2);
    assert_eq!(full.modules[0].module.title, "Basics");
    assert_eq!(full.modules[1].module.id, advanced.id);

    let lessons: Vec<&str> = full.modules[0]
        .lessons
        .iter()
        .map(|l| l.title.as_str())
        .collect();
    assert_eq!(lessons, ["Intro", "Setup"]);
    assert!(full.modules[1].lessons.is_empty());
}

#[test]
fn equal_positions_fall_back_to_id_order() {
    let harness = TestHarness::new();
    let ayoub = harness.register_mentor("ayoub");
    let course = harness.draft_course(&ayoub, 6);

    let first = harness
        .market
        .create_module(&ayoub, course.id, new_module("First", 0))
        .unwrap();
    let second = harness
        .market
        .create_module(&ayoub, course.id, new_module("Second", 0))
        .unwrap();

    let full = harness.market.get_full_course(course.id).unwrap();
    assert_eq!(full.modules[0].module.id, first.id);
    assert_eq!(full.modules[1].module.id, second.id);
}

#[test]
fn publish_is_one_way_and_not_idempotent() {
    let harness = TestHarness::new();
    let ayoub = harness.register_mentor("ayoub");
    let course = harness.draft_course(&ayoub, 6);

    let published = harness
        .market
        .publish_course(&ayoub, course.id, 2_000)
        .unwrap();
    assert_eq!(published.status, CourseStatus::Published);
    assert_eq!(published.published_at, Some(2_000));

    let err = harness
        .market
        .publish_course(&ayoub, course.id, 3_000)
        .unwrap_err();
    assert!(matches!(err, MarketError::AlreadyPublished { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidState);

    // The rejected call changed nothing.
    let fetched = harness.market.get_course_by_id(course.id).unwrap();
    assert_eq!(fetched.published_at, Some(2_000));
}

#[test]
fn only_the_owner_publishes() {
    let harness = TestHarness::new();
    let ayoub = harness.register_mentor("ayoub");
    let sara = harness.register_mentor("sara");
    let course = harness.draft_course(&ayoub, 6);

    let err = harness
        .market
        .publish_course(&sara, course.id, 2_000)
        .unwrap_err();
    assert!(matches!(err, MarketError::NotCourseOwner { .. }));
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[test]
fn published_listing_excludes_drafts() {
    let harness = TestHarness::new();
    let ayoub = harness.register_mentor("ayoub");

    harness.draft_course(&ayoub, 6);
    let live = harness.published_course(&ayoub, 10);

    let listed = harness.market.list_published_courses().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, live.id);
}

#[test]
fn mentor_listing_includes_drafts() {
    let harness = TestHarness::new();
    let ayoub = harness.register_mentor("ayoub");
    let sara = harness.register_mentor("sara");

    harness.draft_course(&ayoub, 6);
    harness.published_course(&ayoub, 10);
    harness.draft_course(&sara, 3);

    let mine = harness.market.list_mentor_courses(&ayoub).unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|c| c.is_owned_by(&ayoub)));
}
