//! Database schema definitions and column families.
//!
//! This module defines the column families used in `RocksDB` storage and
//! the counter keys of the `meta` family.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// User profiles, keyed by account id.
    pub const USERS: &str = "users";

    /// Wallet balances, keyed by account id.
    pub const WALLETS: &str = "wallets";

    /// Course records, keyed by big-endian course id.
    pub const COURSES: &str = "courses";

    /// Module records, keyed by big-endian module id.
    pub const MODULES: &str = "modules";

    /// Lesson records, keyed by big-endian lesson id.
    pub const LESSONS: &str = "lessons";

    /// Enrollment records, keyed by `course_id || student_id`.
    pub const ENROLLMENTS: &str = "enrollments";

    /// Index: modules of a course, keyed by `course_id || module_id`.
    /// Value is empty (index only).
    pub const MODULES_BY_COURSE: &str = "modules_by_course";

    /// Index: lessons of a module, keyed by `module_id || lesson_id`.
    /// Value is empty (index only).
    pub const LESSONS_BY_MODULE: &str = "lessons_by_module";

    /// Index: enrollments of a student, keyed by
    /// `student_id || 0x00 || course_id`. Value is empty (index only).
    pub const ENROLLMENTS_BY_STUDENT: &str = "enrollments_by_student";

    /// Per-collection sequence counters, keyed by the names in
    /// [`super::counter`]. Values are big-endian `u64`.
    pub const META: &str = "meta";
}

/// Counter keys within the `meta` column family.
///
/// Each counter holds the next id to hand out and is advanced in the same
/// write batch as the insert it numbers, so a failed insert never consumes
/// an id.
pub mod counter {
    /// Next course id.
    pub const COURSE_SEQ: &[u8] = b"course_seq";

    /// Next module id.
    pub const MODULE_SEQ: &[u8] = b"module_seq";

    /// Next lesson id.
    pub const LESSON_SEQ: &[u8] = b"lesson_seq";

    /// Next enrollment sequence number.
    pub const ENROLLMENT_SEQ: &[u8] = b"enrollment_seq";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![
        cf::USERS,
        cf::WALLETS,
        cf::COURSES,
        cf::MODULES,
        cf::LESSONS,
        cf::ENROLLMENTS,
        cf::MODULES_BY_COURSE,
        cf::LESSONS_BY_MODULE,
        cf::ENROLLMENTS_BY_STUDENT,
        cf::META,
    ]
}
