//! Key encoding utilities for `RocksDB`.
//!
//! Sequential ids are encoded big-endian so key order equals id order.
//! Account ids are variable-length, so composite keys that start with an
//! account id insert a `0x00` separator; the account charset excludes NUL,
//! which keeps prefix scans unambiguous.

use mentora_core::{AccountId, CourseId, LessonId, ModuleId};

/// Separator between a variable-length account id and the rest of a key.
const SEP: u8 = 0x00;

/// Create a user key from an account id.
#[must_use]
pub fn user_key(account_id: &AccountId) -> Vec<u8> {
    account_id.as_ref().to_vec()
}

/// Create a wallet key from an account id.
#[must_use]
pub fn wallet_key(account_id: &AccountId) -> Vec<u8> {
    account_id.as_ref().to_vec()
}

/// Create a course key from a course id.
#[must_use]
pub fn course_key(course_id: CourseId) -> Vec<u8> {
    course_id.to_be_bytes().to_vec()
}

/// Create a module key from a module id.
#[must_use]
pub fn module_key(module_id: ModuleId) -> Vec<u8> {
    module_id.to_be_bytes().to_vec()
}

/// Create a lesson key from a lesson id.
#[must_use]
pub fn lesson_key(lesson_id: LessonId) -> Vec<u8> {
    lesson_id.to_be_bytes().to_vec()
}

/// Create a course-module index key.
///
/// Format: `course_id (8 bytes) || module_id (8 bytes)`
#[must_use]
pub fn course_module_key(course_id: CourseId, module_id: ModuleId) -> Vec<u8> {
    let mut key = Vec::with_capacity(16);
    key.extend_from_slice(&course_id.to_be_bytes());
    key.extend_from_slice(&module_id.to_be_bytes());
    key
}

/// Create a prefix for iterating all modules of a course.
#[must_use]
pub fn course_modules_prefix(course_id: CourseId) -> Vec<u8> {
    course_id.to_be_bytes().to_vec()
}

/// Extract the module id from a course-module index key.
///
/// Returns `None` if the key is shorter than 16 bytes.
#[must_use]
pub fn module_id_from_course_key(key: &[u8]) -> Option<ModuleId> {
    let bytes: [u8; 8] = key.get(8..16)?.try_into().ok()?;
    Some(ModuleId::from_be_bytes(bytes))
}

/// Create a module-lesson index key.
///
/// Format: `module_id (8 bytes) || lesson_id (8 bytes)`
#[must_use]
pub fn module_lesson_key(module_id: ModuleId, lesson_id: LessonId) -> Vec<u8> {
    let mut key = Vec::with_capacity(16);
    key.extend_from_slice(&module_id.to_be_bytes());
    key.extend_from_slice(&lesson_id.to_be_bytes());
    key
}

/// Create a prefix for iterating all lessons of a module.
#[must_use]
pub fn module_lessons_prefix(module_id: ModuleId) -> Vec<u8> {
    module_id.to_be_bytes().to_vec()
}

/// Extract the lesson id from a module-lesson index key.
///
/// Returns `None` if the key is shorter than 16 bytes.
#[must_use]
pub fn lesson_id_from_module_key(key: &[u8]) -> Option<LessonId> {
    let bytes: [u8; 8] = key.get(8..16)?.try_into().ok()?;
    Some(LessonId::from_be_bytes(bytes))
}

/// Create an enrollment key.
///
/// Format: `course_id (8 bytes) || student_id`. The fixed-width course id
/// comes first so all enrollments of a course share a prefix.
#[must_use]
pub fn enrollment_key(course_id: CourseId, student_id: &AccountId) -> Vec<u8> {
    let mut key = Vec::with_capacity(8 + student_id.as_ref().len());
    key.extend_from_slice(&course_id.to_be_bytes());
    key.extend_from_slice(student_id.as_ref());
    key
}

/// Create a prefix for iterating all enrollments of a course.
#[must_use]
pub fn course_enrollments_prefix(course_id: CourseId) -> Vec<u8> {
    course_id.to_be_bytes().to_vec()
}

/// Create a student-enrollment index key.
///
/// Format: `student_id || 0x00 || course_id (8 bytes)`
#[must_use]
pub fn student_enrollment_key(student_id: &AccountId, course_id: CourseId) -> Vec<u8> {
    let mut key = Vec::with_capacity(student_id.as_ref().len() + 9);
    key.extend_from_slice(student_id.as_ref());
    key.push(SEP);
    key.extend_from_slice(&course_id.to_be_bytes());
    key
}

/// Create a prefix for iterating all enrollments of a student.
#[must_use]
pub fn student_enrollments_prefix(student_id: &AccountId) -> Vec<u8> {
    let mut prefix = Vec::with_capacity(student_id.as_ref().len() + 1);
    prefix.extend_from_slice(student_id.as_ref());
    prefix.push(SEP);
    prefix
}

/// Extract the course id from a student-enrollment index key.
///
/// Returns `None` if the key does not end in 8 course-id bytes.
#[must_use]
pub fn course_id_from_student_key(key: &[u8]) -> Option<CourseId> {
    let start = key.len().checked_sub(8)?;
    let bytes: [u8; 8] = key.get(start..)?.try_into().ok()?;
    Some(CourseId::from_be_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_module_key_format() {
        let key = course_module_key(CourseId::new(1), ModuleId::new(2));
        assert_eq!(key.len(), 16);
        assert_eq!(&key[..8], CourseId::new(1).to_be_bytes());
        assert_eq!(module_id_from_course_key(&key), Some(ModuleId::new(2)));
    }

    #[test]
    fn student_key_separator_disambiguates_prefixes() {
        // "ab" must not be treated as a prefix of "abc"'s keys.
        let ab = AccountId::new("ab").unwrap();
        let abc = AccountId::new("abc").unwrap();
        let key_abc = student_enrollment_key(&abc, CourseId::ZERO);
        assert!(!key_abc.starts_with(&student_enrollments_prefix(&ab)));
        assert!(key_abc.starts_with(&student_enrollments_prefix(&abc)));
    }

    #[test]
    fn student_key_roundtrips_course_id() {
        let student = AccountId::new("ahmed.test").unwrap();
        let key = student_enrollment_key(&student, CourseId::new(42));
        assert_eq!(course_id_from_student_key(&key), Some(CourseId::new(42)));
    }

    #[test]
    fn enrollment_keys_share_course_prefix() {
        let a = enrollment_key(CourseId::new(7), &AccountId::new("ahmed").unwrap());
        let b = enrollment_key(CourseId::new(7), &AccountId::new("sara").unwrap());
        let prefix = course_enrollments_prefix(CourseId::new(7));
        assert!(a.starts_with(&prefix));
        assert!(b.starts_with(&prefix));
        assert!(!a.starts_with(&course_enrollments_prefix(CourseId::new(8))));
    }

    #[test]
    fn sequential_keys_sort_by_id() {
        assert!(course_key(CourseId::new(9)) < course_key(CourseId::new(10)));
        assert!(lesson_key(LessonId::new(255)) < lesson_key(LessonId::new(256)));
    }
}
