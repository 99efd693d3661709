//! Performance service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        courses::{PgCoursesRepository, records::CourseUuid},
        performance::{
            data::NewPerformanceScore,
            errors::PerformanceServiceError,
            overall::{OverallPerformance, overall_performance},
            records::PerformanceScoreRecord,
            repository::PgPerformanceRepository,
        },
        tutors::{PgTutorsRepository, records::TutorUuid},
    },
};

#[derive(Debug, Clone)]
pub struct PgPerformanceService {
    db: Db,
    performance: PgPerformanceRepository,
    tutors: PgTutorsRepository,
    courses: PgCoursesRepository,
}

impl PgPerformanceService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            performance: PgPerformanceRepository::new(),
            tutors: PgTutorsRepository::new(),
            courses: PgCoursesRepository::new(),
        }
    }
}

#[async_trait]
impl PerformanceService for PgPerformanceService {
    #[tracing::instrument(
        name = "performance.service.submit_performance_score",
        skip(self, score),
        fields(
            course_uuid = %score.course_uuid,
            student_uuid = %score.student_uuid,
            score = score.score
        ),
        err
    )]
    async fn submit_performance_score(
        &self,
        score: NewPerformanceScore,
    ) -> Result<PerformanceScoreRecord, PerformanceServiceError> {
        score.validate()?;

        let mut tx = self.db.begin().await?;

        self.courses
            .get_course(&mut tx, score.course_uuid)
            .await
            .map_err(PerformanceServiceError::course)?;

        let record = self.performance.upsert_score(&mut tx, &score).await?;

        tx.commit().await?;

        info!(
            course_uuid = %record.course_uuid,
            student_uuid = %record.student_uuid,
            "submitted performance score"
        );

        Ok(record)
    }

    #[tracing::instrument(
        name = "performance.service.compute_overall_performance",
        skip(self, tutor),
        fields(tutor_uuid = %tutor),
        err
    )]
    async fn compute_overall_performance(
        &self,
        tutor: TutorUuid,
    ) -> Result<OverallPerformance, PerformanceServiceError> {
        let mut tx = self.db.begin().await?;

        self.tutors.get_tutor(&mut tx, tutor).await?;

        let courses = self.courses.list_tutor_courses(&mut tx, tutor).await?;

        if courses.is_empty() {
            tx.commit().await?;

            return Ok(OverallPerformance::default());
        }

        let course_uuids: Vec<CourseUuid> = courses.iter().map(|course| course.uuid).collect();

        let scores = self
            .performance
            .list_course_scores(&mut tx, &course_uuids)
            .await?;

        let total_students = self
            .courses
            .count_enrolled_students(&mut tx, &course_uuids)
            .await?;

        tx.commit().await?;

        Ok(overall_performance(&courses, &scores, total_students))
    }
}

#[automock]
#[async_trait]
pub trait PerformanceService: Send + Sync {
    /// Record a student's score in a course, replacing any earlier score.
    async fn submit_performance_score(
        &self,
        score: NewPerformanceScore,
    ) -> Result<PerformanceScoreRecord, PerformanceServiceError>;

    /// Score and quality averages across the tutor's courses.
    async fn compute_overall_performance(
        &self,
        tutor: TutorUuid,
    ) -> Result<OverallPerformance, PerformanceServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::{
        domain::students::records::StudentUuid,
        test::{TestContext, fixtures},
    };

    use super::*;

    fn new_score(course: CourseUuid, student: StudentUuid, score: f64) -> NewPerformanceScore {
        NewPerformanceScore {
            course_uuid: course,
            student_uuid: student,
            score,
            scored_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn resubmitting_replaces_previous_score() -> TestResult {
        let ctx = TestContext::new().await;
        let tutor = fixtures::create_tutor(&ctx).await;
        let student = fixtures::create_student(&ctx, None, Some(tutor)).await;
        let course = fixtures::create_course(&ctx, tutor, None).await;

        fixtures::enroll(&ctx, course, student).await;

        ctx.performance
            .submit_performance_score(new_score(course, student, 40.0))
            .await?;

        let record = ctx
            .performance
            .submit_performance_score(new_score(course, student, 90.0))
            .await?;

        assert!((record.score - 90.0).abs() < f64::EPSILON);

        let summary = ctx.performance.compute_overall_performance(tutor).await?;

        assert!((summary.overall_score - 90.0).abs() < f64::EPSILON);
        assert_eq!(summary.total_students, 1);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn summary_spans_every_course_of_the_tutor() -> TestResult {
        let ctx = TestContext::new().await;
        let tutor = fixtures::create_tutor(&ctx).await;
        let first = fixtures::create_student(&ctx, None, Some(tutor)).await;
        let second = fixtures::create_student(&ctx, None, Some(tutor)).await;
        let piano = fixtures::create_course(&ctx, tutor, Some(4.0)).await;
        let violin = fixtures::create_course(&ctx, tutor, Some(5.0)).await;
        fixtures::create_course(&ctx, tutor, None).await;

        fixtures::enroll(&ctx, piano, first).await;
        fixtures::enroll(&ctx, piano, second).await;
        fixtures::enroll(&ctx, violin, first).await;

        for (course, student, score) in [(piano, first, 90.0), (piano, second, 70.0), (violin, first, 50.0)] {
            ctx.performance
                .submit_performance_score(new_score(course, student, score))
                .await?;
        }

        let summary = ctx.performance.compute_overall_performance(tutor).await?;

        assert_eq!(summary, OverallPerformance {
            overall_score: 70.0,
            average_course_quality: 4.5,
            total_students: 2,
            total_courses: 3,
        });

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn unknown_course_returns_course_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let student = fixtures::create_student(&ctx, None, None).await;

        let result = ctx
            .performance
            .submit_performance_score(new_score(CourseUuid::new(), student, 50.0))
            .await;

        assert!(
            matches!(result, Err(PerformanceServiceError::CourseNotFound)),
            "expected CourseNotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn unknown_student_on_known_course_returns_invalid_reference() -> TestResult {
        let ctx = TestContext::new().await;
        let tutor = fixtures::create_tutor(&ctx).await;
        let course = fixtures::create_course(&ctx, tutor, None).await;

        let result = ctx
            .performance
            .submit_performance_score(new_score(course, StudentUuid::new(), 50.0))
            .await;

        assert!(
            matches!(result, Err(PerformanceServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn unknown_tutor_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .performance
            .compute_overall_performance(TutorUuid::new())
            .await;

        assert!(
            matches!(result, Err(PerformanceServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
