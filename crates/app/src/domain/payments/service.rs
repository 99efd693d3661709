//! Payments service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        academies::{PgAcademiesRepository, records::AcademyUuid},
        payments::{
            data::{NewPayment, RevenueWindow},
            errors::PaymentsServiceError,
            records::PaymentRecord,
            repository::PgPaymentsRepository,
            revenue::RevenueSummary,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgPaymentsService {
    db: Db,
    payments: PgPaymentsRepository,
    academies: PgAcademiesRepository,
}

impl PgPaymentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            payments: PgPaymentsRepository::new(),
            academies: PgAcademiesRepository::new(),
        }
    }
}

#[async_trait]
impl PaymentsService for PgPaymentsService {
    #[tracing::instrument(
        name = "payments.service.record_payment",
        skip(self, payment),
        fields(
            transaction_id = %payment.transaction_id,
            student_uuid = %payment.student_uuid,
            is_manual_entry = payment.is_manual_entry
        ),
        err
    )]
    async fn record_payment(
        &self,
        payment: NewPayment,
    ) -> Result<PaymentRecord, PaymentsServiceError> {
        payment.validate()?;

        let mut tx = self.db.begin().await?;

        let record = self.payments.create_payment(&mut tx, &payment).await?;

        tx.commit().await?;

        info!(
            transaction_id = %record.transaction_id,
            amount = record.amount,
            "recorded payment"
        );

        Ok(record)
    }

    #[tracing::instrument(
        name = "payments.service.academy_revenue",
        skip(self),
        fields(academy_uuid = %academy),
        err
    )]
    async fn academy_revenue(
        &self,
        academy: AcademyUuid,
        window: RevenueWindow,
    ) -> Result<RevenueSummary, PaymentsServiceError> {
        let mut tx = self.db.begin().await?;

        self.academies.get_academy(&mut tx, academy).await?;

        let payments = self
            .payments
            .list_academy_paid_payments(&mut tx, academy, window)
            .await?;

        tx.commit().await?;

        Ok(RevenueSummary::from_payments(&payments))
    }
}

#[automock]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    /// Record a completed payment from checkout or manual entry.
    async fn record_payment(
        &self,
        payment: NewPayment,
    ) -> Result<PaymentRecord, PaymentsServiceError>;

    /// Summarise an academy's paid revenue within `window`.
    async fn academy_revenue(
        &self,
        academy: AcademyUuid,
        window: RevenueWindow,
    ) -> Result<RevenueSummary, PaymentsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, ToSpan};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test::{TestContext, fixtures};

    use super::*;

    fn new_payment(
        transaction_id: &str,
        student: crate::domain::students::records::StudentUuid,
        academy: Option<AcademyUuid>,
        payment_date: Timestamp,
    ) -> NewPayment {
        NewPayment {
            transaction_id: transaction_id.to_string(),
            student_uuid: student,
            academy_uuid: academy,
            tutor_uuid: None,
            course_uuid: None,
            amount: 12_000,
            commission: 1_200,
            payment_method: "card".to_string(),
            payment_date,
            valid_upto: None,
            is_manual_entry: false,
        }
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn record_payment_returns_paid_record() -> TestResult {
        let ctx = TestContext::new().await;
        let academy = fixtures::create_academy(&ctx, json!({})).await;
        let student = fixtures::create_student(&ctx, Some(academy), None).await;
        let paid_at: Timestamp = "2024-01-01T10:00:00Z".parse()?;

        let mut payment = new_payment("txn_record", student, Some(academy), paid_at);
        payment.valid_upto = Some(paid_at.checked_add(720.hours())?);

        let record = ctx.payments.record_payment(payment).await?;

        assert_eq!(record.transaction_id, "txn_record");
        assert_eq!(record.amount, 12_000);
        assert_eq!(record.valid_upto, Some(paid_at.checked_add(720.hours())?));

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn record_payment_duplicate_transaction_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let student = fixtures::create_student(&ctx, None, None).await;

        ctx.payments
            .record_payment(new_payment("txn_dup", student, None, Timestamp::now()))
            .await?;

        let result = ctx
            .payments
            .record_payment(new_payment("txn_dup", student, None, Timestamp::now()))
            .await;

        assert!(
            matches!(result, Err(PaymentsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn record_payment_unknown_student_returns_invalid_reference() {
        let ctx = TestContext::new().await;

        let result = ctx
            .payments
            .record_payment(new_payment(
                "txn_orphan",
                crate::domain::students::records::StudentUuid::new(),
                None,
                Timestamp::now(),
            ))
            .await;

        assert!(
            matches!(result, Err(PaymentsServiceError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn academy_revenue_sums_payments_inside_window() -> TestResult {
        let ctx = TestContext::new().await;
        let academy = fixtures::create_academy(&ctx, json!({})).await;
        let student = fixtures::create_student(&ctx, Some(academy), None).await;
        let start: Timestamp = "2024-01-01T00:00:00Z".parse()?;

        for (index, offset) in [0_i64, 24, 48].into_iter().enumerate() {
            ctx.payments
                .record_payment(new_payment(
                    &format!("txn_window_{index}"),
                    student,
                    Some(academy),
                    start.checked_add(offset.hours())?,
                ))
                .await?;
        }

        let window = RevenueWindow::new(start, start.checked_add(48.hours())?)?;

        let summary = ctx.payments.academy_revenue(academy, window).await?;

        assert_eq!(summary.payment_count, 2);
        assert_eq!(summary.gross_amount, 24_000);
        assert_eq!(summary.total_commission, 2_400);
        assert_eq!(summary.net_amount, 21_600);

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires Docker for testcontainers"]
    async fn academy_revenue_unknown_academy_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let now = Timestamp::now();

        let result = ctx
            .payments
            .academy_revenue(
                AcademyUuid::new(),
                RevenueWindow::new(now.checked_sub(1.hour())?, now)?,
            )
            .await;

        assert!(
            matches!(result, Err(PaymentsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }
}
