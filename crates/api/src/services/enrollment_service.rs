//! Business rules for enrollments: the capacity, duplicate, and
//! date-window checks that make this layer worth having.

use campus_core::error::CoreError;
use campus_core::policy::UnenrollPolicy;
use campus_core::types::DbId;
use campus_db::models::enrollment::Enrollment;
use campus_db::repositories::{CourseRepo, EnrollmentRepo, StudentRepo};
use chrono::Utc;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Orchestrates the enrollment state machine: absent -> enrolled -> absent.
pub struct EnrollmentService;

impl EnrollmentService {
    /// Enroll a student in a course.
    ///
    /// The duplicate and capacity checks run inside a transaction that
    /// locks the course row, so two concurrent attempts against the same
    /// course serialize instead of both passing the count check. The
    /// unique (student, course) constraint backs the duplicate check at
    /// the store level.
    pub async fn enroll(pool: &PgPool, student_id: DbId, course_id: DbId) -> AppResult<Enrollment> {
        if StudentRepo::find_by_id(pool, student_id).await?.is_none() {
            return Err(AppError::Core(CoreError::not_found("Student", student_id)));
        }

        let mut tx = pool.begin().await?;

        let course = CourseRepo::lock_by_id(&mut tx, course_id)
            .await?
            .ok_or_else(|| AppError::Core(CoreError::not_found("Course", course_id)))?;

        if EnrollmentRepo::find_by_student_and_course(&mut *tx, student_id, course_id)
            .await?
            .is_some()
        {
            return Err(CoreError::conflict(
                "Enrollment",
                "uq_enrollments_student_course",
                "Student is already enrolled in this course",
            )
            .into());
        }

        let enrolled = EnrollmentRepo::count_by_course(&mut *tx, course_id).await?;
        if enrolled >= i64::from(course.max_participants) {
            return Err(CoreError::conflict(
                "Enrollment",
                "course_capacity",
                "Course is full",
            )
            .into());
        }

        let now = Utc::now();
        if course.start_date < now {
            return Err(CoreError::conflict(
                "Enrollment",
                "course_started",
                "Cannot enroll in a course that has already started",
            )
            .into());
        }

        let enrollment = EnrollmentRepo::create(&mut *tx, student_id, course_id, now).await?;
        tx.commit().await?;

        tracing::info!(student_id, course_id, "Student enrolled");
        Ok(enrollment)
    }

    /// Remove a student's enrollment, subject to the lead-time policy.
    pub async fn unenroll(
        pool: &PgPool,
        policy: &UnenrollPolicy,
        student_id: DbId,
        course_id: DbId,
    ) -> AppResult<()> {
        let enrollment = EnrollmentRepo::find_by_student_and_course(pool, student_id, course_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::not_found_key(
                    "Enrollment",
                    format!("{student_id}-{course_id}"),
                ))
            })?;

        if let Some(course) = CourseRepo::find_by_id(pool, course_id).await? {
            policy.check(Utc::now(), course.start_date)?;
        }

        EnrollmentRepo::delete(pool, enrollment.id).await?;
        tracing::info!(student_id, course_id, "Student unenrolled");
        Ok(())
    }

    /// Whether the course exists and still has a free place.
    pub async fn can_enroll(pool: &PgPool, course_id: DbId) -> AppResult<bool> {
        let Some(course) = CourseRepo::find_by_id(pool, course_id).await? else {
            return Ok(false);
        };
        let enrolled = EnrollmentRepo::count_by_course(pool, course_id).await?;
        Ok(enrolled < i64::from(course.max_participants))
    }

    /// Whether the exact (student, course) pair is enrolled.
    pub async fn is_enrolled(pool: &PgPool, student_id: DbId, course_id: DbId) -> AppResult<bool> {
        let enrollment =
            EnrollmentRepo::find_by_student_and_course(pool, student_id, course_id).await?;
        Ok(enrollment.is_some())
    }

    /// List a course's enrollments, newest first.
    pub async fn for_course(pool: &PgPool, course_id: DbId) -> AppResult<Vec<Enrollment>> {
        if CourseRepo::find_by_id(pool, course_id).await?.is_none() {
            return Err(AppError::Core(CoreError::not_found("Course", course_id)));
        }
        Ok(EnrollmentRepo::find_by_course(pool, course_id).await?)
    }
}
