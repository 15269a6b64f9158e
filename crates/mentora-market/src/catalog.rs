//! Catalog entry points: course/module/lesson creation, lookups, the full
//! course aggregate and the publish transition.

use mentora_core::{
    AccountId, Course, CourseId, CourseStatus, FullCourse, FullModule, Lesson, LessonId,
    MarketError, Module, ModuleId, NewCourse, NewLesson, NewModule, Result,
};

use crate::Marketplace;

impl Marketplace {
    /// Create a course owned by the calling mentor.
    ///
    /// The course receives the next sequential id and starts as a draft.
    ///
    /// # Errors
    ///
    /// Returns `NotAMentor` if the caller is unregistered or registered
    /// without the mentor role.
    pub fn create_course(&self, caller: &AccountId, fields: NewCourse) -> Result<Course> {
        let mentor = self.store().get_user(caller)?;
        if !mentor.is_some_and(|user| user.is_mentor()) {
            return Err(MarketError::NotAMentor {
                account_id: caller.to_string(),
            });
        }

        let course = self.store().insert_course(fields, caller.clone())?;
        tracing::info!(course = course.id.value(), mentor = %caller, title = %course.title, "course created");
        Ok(course)
    }

    /// Create a module under a course the caller owns.
    ///
    /// # Errors
    ///
    /// Returns `CourseNotFound` if the course does not exist and
    /// `NotCourseOwner` if the caller does not own it.
    pub fn create_module(
        &self,
        caller: &AccountId,
        course_id: CourseId,
        fields: NewModule,
    ) -> Result<Module> {
        let course = self.course(course_id)?;
        if !course.is_owned_by(caller) {
            return Err(MarketError::NotCourseOwner {
                account_id: caller.to_string(),
                course_id: course_id.value(),
            });
        }

        let module = self.store().insert_module(fields, course_id)?;
        tracing::info!(module = module.id.value(), course = course_id.value(), "module created");
        Ok(module)
    }

    /// Create a lesson under a module whose parent course the caller owns.
    ///
    /// # Errors
    ///
    /// Returns `ModuleNotFound` if the module does not exist and
    /// `NotCourseOwner` if the caller does not own the parent course.
    pub fn create_lesson(
        &self,
        caller: &AccountId,
        module_id: ModuleId,
        fields: NewLesson,
    ) -> Result<Lesson> {
        let module = self.module(module_id)?;
        let course = self.course(module.course_id)?;
        if !course.is_owned_by(caller) {
            return Err(MarketError::NotCourseOwner {
                account_id: caller.to_string(),
                course_id: course.id.value(),
            });
        }

        let lesson = self.store().insert_lesson(fields, module_id)?;
        tracing::info!(lesson = lesson.id.value(), module = module_id.value(), "lesson created");
        Ok(lesson)
    }

    /// Look up a course by id.
    ///
    /// # Errors
    ///
    /// Returns `CourseNotFound` for an unknown id.
    pub fn get_course_by_id(&self, course_id: CourseId) -> Result<Course> {
        self.course(course_id)
    }

    /// Look up a module by id.
    ///
    /// # Errors
    ///
    /// Returns `ModuleNotFound` for an unknown id.
    pub fn get_module_by_id(&self, module_id: ModuleId) -> Result<Module> {
        self.module(module_id)
    }

    /// Look up a lesson by id.
    ///
    /// # Errors
    ///
    /// Returns `LessonNotFound` for an unknown id.
    pub fn get_lesson_by_id(&self, lesson_id: LessonId) -> Result<Lesson> {
        self.lesson(lesson_id)
    }

    /// Join a course with its mentor and full module/lesson hierarchy.
    ///
    /// Modules and lessons are ordered by (`order` ascending, id ascending)
    /// so repeated calls over unchanged state return identical aggregates.
    ///
    /// # Errors
    ///
    /// Returns `CourseNotFound` for an unknown id.
    pub fn get_full_course(&self, course_id: CourseId) -> Result<FullCourse> {
        let course = self.course(course_id)?;
        let mentor = self.user(&course.mentor_id)?;

        let mut modules = self.store().list_modules_by_course(course_id)?;
        modules.sort_by_key(|m| (m.order, m.id));

        let mut full_modules = Vec::with_capacity(modules.len());
        for module in modules {
            let mut lessons = self.store().list_lessons_by_module(module.id)?;
            lessons.sort_by_key(|l| (l.order, l.id));
            full_modules.push(FullModule { module, lessons });
        }

        Ok(FullCourse {
            course,
            mentor,
            modules: full_modules,
        })
    }

    /// Publish a course, making it visible and enrollable.
    ///
    /// The transition is one-way and not idempotent: publishing an already
    /// published course fails.
    ///
    /// # Errors
    ///
    /// Returns `CourseNotFound` for an unknown id, `NotCourseOwner` if the
    /// caller does not own the course, and `AlreadyPublished` on a second
    /// publish.
    pub fn publish_course(
        &self,
        caller: &AccountId,
        course_id: CourseId,
        published_at: u64,
    ) -> Result<Course> {
        let mut course = self.course(course_id)?;
        if !course.is_owned_by(caller) {
            return Err(MarketError::NotCourseOwner {
                account_id: caller.to_string(),
                course_id: course_id.value(),
            });
        }
        if course.is_published() {
            return Err(MarketError::AlreadyPublished {
                course_id: course_id.value(),
            });
        }

        course.status = CourseStatus::Published;
        course.published_at = Some(published_at);
        self.store().put_course(&course)?;

        tracing::info!(course = course_id.value(), mentor = %caller, "course published");
        Ok(course)
    }

    /// List all published courses, in course-id order.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage layer fails.
    pub fn list_published_courses(&self) -> Result<Vec<Course>> {
        let courses = self.store().list_courses()?;
        Ok(courses.into_iter().filter(Course::is_published).collect())
    }

    /// List all courses owned by a mentor, drafts included, in id order.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage layer fails.
    pub fn list_mentor_courses(&self, mentor_id: &AccountId) -> Result<Vec<Course>> {
        let courses = self.store().list_courses()?;
        Ok(courses
            .into_iter()
            .filter(|course| course.is_owned_by(mentor_id))
            .collect())
    }
}
