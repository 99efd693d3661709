//! Feedback service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        courses::PgCoursesRepository,
        feedback::{
            data::NewFeedback,
            errors::FeedbackServiceError,
            pending::PendingFeedback,
            records::FeedbackRecord,
            repository::PgFeedbackRepository,
        },
        students::PgStudentsRepository,
        tutors::{PgTutorsRepository, records::TutorUuid},
    },
};

#[derive(Debug, Clone)]
pub struct PgFeedbackService {
    db: Db,
    feedback: PgFeedbackRepository,
    tutors: PgTutorsRepository,
    students: PgStudentsRepository,
    courses: PgCoursesRepository,
}

impl PgFeedbackService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            feedback: PgFeedbackRepository::new(),
            tutors: PgTutorsRepository::new(),
            students: PgStudentsRepository::new(),
            courses: PgCoursesRepository::new(),
        }
    }
}

#[async_trait]
impl FeedbackService for PgFeedbackService {
    #[tracing::instrument(
        name = "feedback.service.record_feedback",
        skip(self, feedback),
        fields(
            student_uuid = %feedback.student_uuid,
            class_uuid = %feedback.class_uuid,
            subject = %feedback.subject
        ),
        err
    )]
    async fn record_feedback(
        &self,
        feedback: NewFeedback,
    ) -> Result<FeedbackRecord, FeedbackServiceError> {
        feedback.validate()?;

        let mut tx = self.db.begin().await?;

        let record = self.feedback.create_feedback(&mut tx, &feedback).await?;

        tx.commit().await?;

        info!(feedback_uuid = %record.uuid, "recorded feedback");

        Ok(record)
    }

    #[tracing::instrument(
        name = "feedback.service.compute_pending_feedback",
        skip(self, tutor, at),
        fields(tutor_uuid = %tutor, evaluated_at = %at),
        err
    )]
    async fn compute_pending_feedback(
        &self,
        tutor: TutorUuid,
        at: Timestamp,
    ) -> Result<PendingFeedback, FeedbackServiceError> {
        let mut tx = self.db.begin().await?;

        self.tutors.get_tutor(&mut tx, tutor).await?;

        let students = self.students.list_tutor_students(&mut tx, tutor).await?;

        if students.is_empty() {
            tx.commit().await?;

            return Ok(PendingFeedback::default());
        }

        let classes = self
            .courses
            .list_past_classes(&mut tx, &students, at)
            .await?;

        let given = if classes.is_empty() {
            0
        } else {
            self.feedback
                .count_feedback(&mut tx, &students, &classes)
                .await?
        };

        tx.commit().await?;

        let pending = PendingFeedback::new(students.len() as u64, classes.len() as u64, given);

        debug!(
            pending_feedback = pending.pending_feedback,
            "computed pending feedback"
        );

        Ok(pending)
    }
}

#[automock]
#[async_trait]
pub trait FeedbackService: Send + Sync {
    /// Record one feedback entry for a student's class.
    async fn record_feedback(
        &self,
        feedback: NewFeedback,
    ) -> Result<FeedbackRecord, FeedbackServiceError>;

    /// Feedback still owed by `tutor` for classes that ended before `at`.
    async fn compute_pending_feedback(
        &self,
        tutor: TutorUuid,
        at: Timestamp,
    ) -> Result<PendingFeedback, FeedbackServiceError>;
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use testresult::TestResult;

    use crate::{
        domain::{
            courses::records::ClassUuid,
            feedback::{records::FeedbackUuid, subjects::Subject},
            students::records::StudentUuid,
        },
        test::{TestContext, fixtures},
    };

    use super::*;

    fn new_feedback(student: StudentUuid, class: ClassUuid, subject: Subject) -> NewFeedback {
        let attribute = subject.attributes()[0];

        NewFeedback {
            uuid: FeedbackUuid::new(),
            student_uuid: student,
            class_uuid: class,
            subject,
            ratings: BTreeMap::from([(attribute.to_string(), 4)]),
            comment: Some("steady progress".to_string()),
        }
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn pending_counts_past_classes_for_every_student() -> TestResult {
        let ctx = TestContext::new().await;
        let tutor = fixtures::create_tutor(&ctx).await;
        let first = fixtures::create_student(&ctx, None, Some(tutor)).await;
        let second = fixtures::create_student(&ctx, None, Some(tutor)).await;
        let course = fixtures::create_course(&ctx, tutor, None).await;

        fixtures::enroll(&ctx, course, first).await;
        fixtures::enroll(&ctx, course, second).await;

        let past = fixtures::create_class(&ctx, course, "2024-01-01T10:00:00Z").await?;
        fixtures::create_class(&ctx, course, "2024-01-02T10:00:00Z").await?;
        fixtures::create_class(&ctx, course, "2024-03-01T10:00:00Z").await?;

        ctx.feedback
            .record_feedback(new_feedback(first, past, Subject::Music))
            .await?;

        let pending = ctx
            .feedback
            .compute_pending_feedback(tutor, "2024-02-01T00:00:00Z".parse()?)
            .await?;

        assert_eq!(pending.student_count, 2);
        assert_eq!(pending.past_class_count, 2);
        assert_eq!(pending.feedback_given, 1);
        assert_eq!(pending.pending_feedback, 3);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn mixed_subject_feedback_clears_every_pending_entry() -> TestResult {
        let ctx = TestContext::new().await;
        let tutor = fixtures::create_tutor(&ctx).await;
        let first = fixtures::create_student(&ctx, None, Some(tutor)).await;
        let second = fixtures::create_student(&ctx, None, Some(tutor)).await;
        let course = fixtures::create_course(&ctx, tutor, None).await;

        fixtures::enroll(&ctx, course, first).await;
        fixtures::enroll(&ctx, course, second).await;

        let mut classes = Vec::new();

        for start in ["2024-01-01T10:00:00Z", "2024-01-08T10:00:00Z", "2024-01-15T10:00:00Z"] {
            classes.push(fixtures::create_class(&ctx, course, start).await?);
        }

        let at: Timestamp = "2024-02-01T00:00:00Z".parse()?;

        let before = ctx.feedback.compute_pending_feedback(tutor, at).await?;

        assert_eq!(before.feedback_needed, 6);
        assert_eq!(before.pending_feedback, 6);

        let mut subjects = Subject::ALL.iter().copied().cycle();

        for class in &classes {
            for student in [first, second] {
                let subject = subjects.next().unwrap_or(Subject::Music);

                ctx.feedback
                    .record_feedback(new_feedback(student, *class, subject))
                    .await?;
            }
        }

        let after = ctx.feedback.compute_pending_feedback(tutor, at).await?;

        assert_eq!(after.feedback_given, 6);
        assert_eq!(after.pending_feedback, 0);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn feedback_under_several_subjects_can_go_negative() -> TestResult {
        let ctx = TestContext::new().await;
        let tutor = fixtures::create_tutor(&ctx).await;
        let student = fixtures::create_student(&ctx, None, Some(tutor)).await;
        let course = fixtures::create_course(&ctx, tutor, None).await;

        fixtures::enroll(&ctx, course, student).await;

        let class = fixtures::create_class(&ctx, course, "2024-01-01T10:00:00Z").await?;

        for subject in [Subject::Music, Subject::Vocal] {
            ctx.feedback
                .record_feedback(new_feedback(student, class, subject))
                .await?;
        }

        let pending = ctx
            .feedback
            .compute_pending_feedback(tutor, "2024-02-01T00:00:00Z".parse()?)
            .await?;

        assert_eq!(pending.pending_feedback, -1);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn tutor_without_students_has_nothing_pending() -> TestResult {
        let ctx = TestContext::new().await;
        let tutor = fixtures::create_tutor(&ctx).await;

        let pending = ctx
            .feedback
            .compute_pending_feedback(tutor, Timestamp::now())
            .await?;

        assert_eq!(pending, PendingFeedback::default());

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn duplicate_feedback_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let tutor = fixtures::create_tutor(&ctx).await;
        let student = fixtures::create_student(&ctx, None, Some(tutor)).await;
        let course = fixtures::create_course(&ctx, tutor, None).await;
        let class = fixtures::create_class(&ctx, course, "2024-01-01T10:00:00Z").await?;

        ctx.feedback
            .record_feedback(new_feedback(student, class, Subject::Dance))
            .await?;

        let result = ctx
            .feedback
            .record_feedback(new_feedback(student, class, Subject::Dance))
            .await;

        assert!(
            matches!(result, Err(FeedbackServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn unknown_tutor_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .feedback
            .compute_pending_feedback(TutorUuid::new(), Timestamp::now())
            .await;

        assert!(
            matches!(result, Err(FeedbackServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
