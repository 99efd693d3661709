//! Suspension service.

use async_trait::async_trait;
use jiff::{Timestamp, tz::TimeZone};
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        academies::PgAcademiesRepository,
        payments::{PgPaymentsRepository, selection::current_payment},
        students::{PgStudentsRepository, records::StudentUuid},
        suspension::{
            errors::SuspensionServiceError,
            evaluator::{SuspensionStatus, evaluate},
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgSuspensionService {
    db: Db,
    time_zone: TimeZone,
    students: PgStudentsRepository,
    academies: PgAcademiesRepository,
    payments: PgPaymentsRepository,
}

impl PgSuspensionService {
    /// Create a service that draws day boundaries in `time_zone`.
    #[must_use]
    pub fn new(db: Db, time_zone: TimeZone) -> Self {
        Self {
            db,
            time_zone,
            students: PgStudentsRepository::new(),
            academies: PgAcademiesRepository::new(),
            payments: PgPaymentsRepository::new(),
        }
    }
}

#[async_trait]
impl SuspensionService for PgSuspensionService {
    #[tracing::instrument(
        name = "suspension.service.evaluate_suspension",
        skip(self, student, at),
        fields(student_uuid = %student, evaluated_at = %at),
        err
    )]
    async fn evaluate_suspension(
        &self,
        student: StudentUuid,
        at: Timestamp,
    ) -> Result<SuspensionStatus, SuspensionServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .students
            .get_student(&mut tx, student)
            .await
            .map_err(SuspensionServiceError::student)?;

        let Some(academy) = record.academy_uuid else {
            tx.commit().await?;

            return evaluate(None, None, at, &self.time_zone);
        };

        let academy = self
            .academies
            .get_academy(&mut tx, academy)
            .await
            .map_err(SuspensionServiceError::academy)?;

        let payments = self
            .payments
            .list_student_paid_payments(&mut tx, student)
            .await?;

        tx.commit().await?;

        let status = evaluate(
            Some(&academy.policies),
            current_payment(&payments),
            at,
            &self.time_zone,
        )?;

        debug!(
            is_suspended = status.is_suspended,
            reason = status.reason.as_str(),
            "evaluated suspension"
        );

        Ok(status)
    }
}

#[automock]
#[async_trait]
pub trait SuspensionService: Send + Sync {
    /// Decide whether the student's access is suspended at `at`.
    async fn evaluate_suspension(
        &self,
        student: StudentUuid,
        at: Timestamp,
    ) -> Result<SuspensionStatus, SuspensionServiceError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        domain::suspension::evaluator::SuspensionReason,
        test::{TestContext, fixtures},
    };

    use super::*;

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn independent_student_is_not_suspended() -> TestResult {
        let ctx = TestContext::new().await;
        let student = fixtures::create_student(&ctx, None, None).await;

        let status = ctx
            .suspension
            .evaluate_suspension(student, Timestamp::now())
            .await?;

        assert!(!status.is_suspended);
        assert_eq!(status.reason, SuspensionReason::NoAcademy);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn academy_student_without_payment_is_suspended() -> TestResult {
        let ctx = TestContext::new().await;
        let academy = fixtures::create_academy(&ctx, json!({})).await;
        let student = fixtures::create_student(&ctx, Some(academy), None).await;

        let status = ctx
            .suspension
            .evaluate_suspension(student, Timestamp::now())
            .await?;

        assert!(status.is_suspended);
        assert_eq!(status.reason, SuspensionReason::NoPaymentFound);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn latest_paid_coverage_decides_with_academy_grace() -> TestResult {
        let ctx = TestContext::new().await;
        let academy = fixtures::create_academy(&ctx, json!({ "autoSuspendAfter": 3 })).await;
        let student = fixtures::create_student(&ctx, Some(academy), None).await;

        fixtures::create_paid_payment(
            &ctx,
            student,
            academy,
            "txn_old",
            "2024-01-01T00:00:00Z",
            Some("2024-01-05T00:00:00Z"),
        )
        .await?;

        fixtures::create_paid_payment(
            &ctx,
            student,
            academy,
            "txn_new",
            "2024-01-04T00:00:00Z",
            Some("2024-01-20T00:00:00Z"),
        )
        .await?;

        let inside = ctx
            .suspension
            .evaluate_suspension(student, "2024-01-23T12:00:00Z".parse()?)
            .await?;

        assert!(!inside.is_suspended);
        assert_eq!(inside.auto_suspend_after, Some(3));

        let after = ctx
            .suspension
            .evaluate_suspension(student, "2024-01-24T00:00:00Z".parse()?)
            .await?;

        assert!(after.is_suspended);
        assert_eq!(after.valid_upto, Some("2024-01-20T00:00:00Z".parse()?));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn unknown_student_returns_student_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .suspension
            .evaluate_suspension(StudentUuid::new(), Timestamp::now())
            .await;

        assert!(
            matches!(result, Err(SuspensionServiceError::StudentNotFound)),
            "expected StudentNotFound, got {result:?}"
        );
    }
}
