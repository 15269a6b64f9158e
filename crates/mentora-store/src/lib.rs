//! `RocksDB` storage layer for the Mentora course marketplace.
//!
//! This crate provides persistent storage for users, wallets, the course
//! hierarchy and enrollments, using `RocksDB` with column families for
//! point lookups and parent-key range iteration.
//!
//! # Architecture
//!
//! - `users` / `wallets`: keyed by account id
//! - `courses` / `modules` / `lessons`: keyed by big-endian sequential id
//! - `enrollments`: keyed by `course_id || student_id`
//! - `modules_by_course`, `lessons_by_module`, `enrollments_by_student`:
//!   empty-value index families for range iteration by parent key
//! - `meta`: per-collection id counters, advanced in the same write batch
//!   as the insert they number
//!
//! # Example
//!
//! ```no_run
//! use mentora_store::{RocksStore, Store};
//! use mentora_core::AccountId;
//!
//! let store = RocksStore::open("/tmp/mentora-db").unwrap();
//!
//! let ahmed = AccountId::new("ahmed").unwrap();
//! let balance = store.credit_wallet(&ahmed, 100).unwrap();
//! assert_eq!(balance, 100);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod rocks;
pub mod schema;

pub use error::{Result, StoreError};
pub use rocks::RocksStore;

use mentora_core::{
    AccountId, Course, CourseId, Enrollment, Lesson, LessonId, Module, ModuleId, NewCourse,
    NewLesson, NewModule, User, Wallet,
};

/// The storage trait defining all database operations.
///
/// This trait abstracts the storage layer, allowing for different
/// implementations (e.g. `RocksDB`, in-memory for testing). Invocations are
/// serialized by the hosting platform; implementations only guarantee that
/// each operation commits all of its writes or none of them.
pub trait Store: Send + Sync {
    // =========================================================================
    // User Operations
    // =========================================================================

    /// Insert a user profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn put_user(&self, user: &User) -> Result<()>;

    /// Get a user by account id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_user(&self, account_id: &AccountId) -> Result<Option<User>>;

    /// Find a user by username (full scan).
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn find_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Find a user by email (full scan).
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    // =========================================================================
    // Wallet Operations
    // =========================================================================

    /// Get a wallet by account id. Absent wallets read as zero balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_wallet(&self, account_id: &AccountId) -> Result<Option<Wallet>>;

    /// Add funds to a wallet, creating it if absent.
    ///
    /// Returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn credit_wallet(&self, account_id: &AccountId, amount: u128) -> Result<u128>;

    // =========================================================================
    // Course Operations
    // =========================================================================

    /// Insert a new course, allocating the next sequential course id.
    ///
    /// The id counter advances in the same batch as the insert, so a failed
    /// insert never consumes an id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn insert_course(&self, new: NewCourse, mentor_id: AccountId) -> Result<Course>;

    /// Get a course by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_course(&self, course_id: CourseId) -> Result<Option<Course>>;

    /// Overwrite a course record. Used for the publish transition only.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the course doesn't exist.
    fn put_course(&self, course: &Course) -> Result<()>;

    /// List all courses in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_courses(&self) -> Result<Vec<Course>>;

    // =========================================================================
    // Module Operations
    // =========================================================================

    /// Insert a new module under a course, allocating the next module id
    /// and maintaining the course index.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn insert_module(&self, new: NewModule, course_id: CourseId) -> Result<Module>;

    /// Get a module by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_module(&self, module_id: ModuleId) -> Result<Option<Module>>;

    /// List all modules of a course, in module-id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_modules_by_course(&self, course_id: CourseId) -> Result<Vec<Module>>;

    // =========================================================================
    // Lesson Operations
    // =========================================================================

    /// Insert a new lesson under a module, allocating the next lesson id
    /// and maintaining the module index.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn insert_lesson(&self, new: NewLesson, module_id: ModuleId) -> Result<Lesson>;

    /// Get a lesson by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_lesson(&self, lesson_id: LessonId) -> Result<Option<Lesson>>;

    /// List all lessons of a module, in lesson-id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_lessons_by_module(&self, module_id: ModuleId) -> Result<Vec<Lesson>>;

    // =========================================================================
    // Enrollment Operations
    // =========================================================================

    /// Get the enrollment for a (course, student) pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_enrollment(
        &self,
        course_id: CourseId,
        student_id: &AccountId,
    ) -> Result<Option<Enrollment>>;

    /// List all enrollments of a student, ordered by enrollment sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_enrollments_by_student(&self, student_id: &AccountId) -> Result<Vec<Enrollment>>;

    /// List all enrollments of a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_enrollments_by_course(&self, course_id: CourseId) -> Result<Vec<Enrollment>>;

    // =========================================================================
    // Compound Operations
    // =========================================================================

    /// Settle an enrollment: debit the student, credit the mentor (and the
    /// treasury, when a fee applies) and insert the enrollment record, all
    /// in one atomic write.
    ///
    /// The student is debited exactly `course.price + fee`; the mentor is
    /// credited exactly `course.price`. Returns the inserted enrollment.
    ///
    /// # Errors
    ///
    /// - `StoreError::DuplicateEnrollment` if the pair is already enrolled.
    /// - `StoreError::InsufficientFunds` if the student's wallet cannot
    ///   cover the debit. No state changes in either case.
    fn settle_enrollment(
        &self,
        course: &Course,
        student_id: &AccountId,
        fee: u128,
        treasury: Option<&AccountId>,
        enrolled_at: u64,
    ) -> Result<Enrollment>;
}
