//! Enrollment records.

use serde::{Deserialize, Serialize};

use crate::{AccountId, CourseId};

/// A durable record linking a student to a course they paid for.
///
/// At most one enrollment exists per (student, course) pair. The `seq`
/// field is a global enrollment sequence number and defines the order in
/// which a student's courses are listed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    /// Global enrollment sequence number, assigned on settlement.
    pub seq: u64,

    /// The enrolled course.
    pub course_id: CourseId,

    /// The enrolled student.
    pub student_id: AccountId,

    /// Amount actually debited from the student, in the smallest unit.
    /// Equals the course price plus the platform fee at enrollment time.
    pub amount_paid: u128,

    /// Enrollment timestamp, caller-supplied milliseconds.
    pub enrolled_at: u64,
}
