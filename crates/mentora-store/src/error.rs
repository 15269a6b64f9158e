//! Error types for marketplace storage.

use mentora_core::MarketError;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Serialization/deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Record not found.
    #[error("not found")]
    NotFound,

    /// Wallet balance does not cover the debit.
    #[error("insufficient funds: balance={balance}, required={required}")]
    InsufficientFunds {
        /// Current wallet balance.
        balance: u128,
        /// Amount the settlement requires.
        required: u128,
    },

    /// An enrollment already exists for the (student, course) pair.
    #[error("duplicate enrollment: student={student_id}, course={course_id}")]
    DuplicateEnrollment {
        /// The enrolled student.
        student_id: String,
        /// The course in question.
        course_id: u64,
    },
}

impl From<StoreError> for MarketError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(msg) | StoreError::Serialization(msg) => Self::Storage(msg),
            StoreError::NotFound => Self::Storage("record missing".into()),
            StoreError::InsufficientFunds { balance, required } => Self::InsufficientPayment {
                attached: balance,
                required,
            },
            StoreError::DuplicateEnrollment {
                student_id,
                course_id,
            } => Self::AlreadyEnrolled {
                student_id,
                course_id,
            },
        }
    }
}
