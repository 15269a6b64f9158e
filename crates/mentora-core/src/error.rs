//! Error types for marketplace operations.

/// Result type for marketplace operations.
pub type Result<T> = std::result::Result<T, MarketError>;

/// Errors surfaced by marketplace entry points.
///
/// Every variant classifies into exactly one [`ErrorKind`], so callers can
/// distinguish "already exists" from "not authorized" from "not found"
/// without matching on individual variants.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    /// No profile exists for the account.
    #[error("user not found: {account_id}")]
    UserNotFound {
        /// The account that has no profile.
        account_id: String,
    },

    /// The course id is unknown.
    #[error("course not found: {course_id}")]
    CourseNotFound {
        /// The unknown course id.
        course_id: u64,
    },

    /// The module id is unknown.
    #[error("module not found: {module_id}")]
    ModuleNotFound {
        /// The unknown module id.
        module_id: u64,
    },

    /// The lesson id is unknown.
    #[error("lesson not found: {lesson_id}")]
    LessonNotFound {
        /// The unknown lesson id.
        lesson_id: u64,
    },

    /// The account already has a profile, or the username or email is taken.
    #[error("profile already exists: {detail}")]
    ProfileExists {
        /// Which unique field collided.
        detail: String,
    },

    /// The student is already enrolled in the course.
    #[error("already enrolled: student={student_id}, course={course_id}")]
    AlreadyEnrolled {
        /// The enrolled student.
        student_id: String,
        /// The course in question.
        course_id: u64,
    },

    /// The caller is registered but lacks the mentor role.
    #[error("not a mentor: {account_id}")]
    NotAMentor {
        /// The rejected caller.
        account_id: String,
    },

    /// The caller is registered but lacks the student role.
    #[error("not a student: {account_id}")]
    NotAStudent {
        /// The rejected caller.
        account_id: String,
    },

    /// The caller does not own the course being modified.
    #[error("not the course owner: account={account_id}, course={course_id}")]
    NotCourseOwner {
        /// The rejected caller.
        account_id: String,
        /// The course in question.
        course_id: u64,
    },

    /// The course is already published; publication is one-way and not
    /// idempotent.
    #[error("course already published: {course_id}")]
    AlreadyPublished {
        /// The course in question.
        course_id: u64,
    },

    /// The course is still a draft and cannot be enrolled in.
    #[error("course not published: {course_id}")]
    NotPublished {
        /// The course in question.
        course_id: u64,
    },

    /// The attached payment does not cover the required amount, or the
    /// caller's wallet cannot cover what was attached. No funds move.
    #[error("insufficient payment: attached={attached}, required={required}")]
    InsufficientPayment {
        /// The amount the caller attached or holds.
        attached: u128,
        /// The amount the enrollment requires.
        required: u128,
    },

    /// Storage layer failure.
    #[error("storage error: {0}")]
    Storage(String),
}

impl MarketError {
    /// Classify this error into one of the contract's error kinds.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound { .. }
            | Self::CourseNotFound { .. }
            | Self::ModuleNotFound { .. }
            | Self::LessonNotFound { .. } => ErrorKind::NotFound,
            Self::NotAMentor { .. }
            | Self::NotAStudent { .. }
            | Self::NotCourseOwner { .. } => ErrorKind::Unauthorized,
            Self::AlreadyPublished { .. } | Self::NotPublished { .. } => ErrorKind::InvalidState,
            Self::ProfileExists { .. } | Self::AlreadyEnrolled { .. } => ErrorKind::Conflict,
            Self::InsufficientPayment { .. } => ErrorKind::InsufficientPayment,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }
}

/// The distinct failure classes of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced id does not exist.
    NotFound,

    /// The caller lacks the required role or ownership.
    Unauthorized,

    /// The operation is not valid for the entity's current state.
    InvalidState,

    /// A unique key already exists.
    Conflict,

    /// The attached value is below the required price.
    InsufficientPayment,

    /// The storage layer failed.
    Storage,
}
