//! Enrollment entry points and the escrow settlement path.
//!
//! The engine keeps a wallet ledger standing in for the host platform's
//! native balances: `deposit` models value arriving from outside, and
//! `enroll_course` is the only path that moves value between accounts.

use mentora_core::{AccountId, Course, CourseId, Enrollment, MarketError, Result, User};

use crate::Marketplace;

impl Marketplace {
    /// Fund an account's wallet, creating it if absent.
    ///
    /// Returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage layer fails.
    pub fn deposit(&self, account_id: &AccountId, amount: u128) -> Result<u128> {
        Ok(self.store().credit_wallet(account_id, amount)?)
    }

    /// The wallet balance of an account. Unfunded accounts read as zero.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage layer fails.
    pub fn balance_of(&self, account_id: &AccountId) -> Result<u128> {
        Ok(self
            .store()
            .get_wallet(account_id)?
            .map_or(0, |wallet| wallet.balance))
    }

    /// Enroll the calling student in a published course, settling the
    /// attached payment to the course owner.
    ///
    /// The student is debited exactly the course price plus the platform
    /// fee; any surplus of `attached` over that amount never leaves the
    /// student's wallet, so overpayment is refunded in full by never being
    /// taken. The debit, the owner credit and the enrollment insert commit
    /// atomically; a failure at any step leaves state unchanged.
    ///
    /// # Errors
    ///
    /// - `NotAStudent` if the caller is unregistered or not a student
    ///   (mentors never enroll, so self-enrollment cannot arise).
    /// - `CourseNotFound` for an unknown course id.
    /// - `NotPublished` if the course is still a draft.
    /// - `AlreadyEnrolled` if the pair is already enrolled.
    /// - `InsufficientPayment` if `attached` does not cover the required
    ///   amount, or the caller's wallet cannot cover the debit.
    pub fn enroll_course(
        &self,
        caller: &AccountId,
        course_id: CourseId,
        enrolled_at: u64,
        attached: u128,
    ) -> Result<Enrollment> {
        let student = self.store().get_user(caller)?;
        if !student.is_some_and(|user| user.is_student()) {
            return Err(MarketError::NotAStudent {
                account_id: caller.to_string(),
            });
        }

        let course = self.course(course_id)?;
        if !course.is_published() {
            return Err(MarketError::NotPublished {
                course_id: course_id.value(),
            });
        }

        if self.store().get_enrollment(course_id, caller)?.is_some() {
            return Err(MarketError::AlreadyEnrolled {
                student_id: caller.to_string(),
                course_id: course_id.value(),
            });
        }

        let fee = self.config().platform_fee(course.price);
        let required = course.price + fee;
        if attached < required {
            tracing::debug!(course = course_id.value(), student = %caller, attached, required, "enrollment rejected: payment too low");
            return Err(MarketError::InsufficientPayment { attached, required });
        }

        let treasury = self.config().treasury_account.clone();
        let enrollment =
            self.store()
                .settle_enrollment(&course, caller, fee, treasury.as_ref(), enrolled_at)?;

        tracing::info!(course = course_id.value(), student = %caller, paid = enrollment.amount_paid, "student enrolled");
        Ok(enrollment)
    }

    /// List the courses a student has enrolled in, in enrollment order.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage layer fails.
    pub fn get_student_courses(&self, student_id: &AccountId) -> Result<Vec<Course>> {
        let enrollments = self.store().list_enrollments_by_student(student_id)?;

        let mut courses = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            if let Some(course) = self.store().get_course(enrollment.course_id)? {
                courses.push(course);
            }
        }
        Ok(courses)
    }

    /// List the students enrolled in a course.
    ///
    /// # Errors
    ///
    /// Returns `CourseNotFound` for an unknown course id.
    pub fn list_course_students(&self, course_id: CourseId) -> Result<Vec<User>> {
        self.course(course_id)?;

        let enrollments = self.store().list_enrollments_by_course(course_id)?;
        let mut students = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            if let Some(student) = self.store().get_user(&enrollment.student_id)? {
                students.push(student);
            }
        }
        Ok(students)
    }
}
