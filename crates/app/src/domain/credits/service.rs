//! Credits service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        credits::{
            data::CreditAdjustment,
            errors::CreditsServiceError,
            records::{CreditBalance, CreditsLedger},
            repository::PgCreditsRepository,
        },
        students::records::StudentUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgCreditsService {
    db: Db,
    repository: PgCreditsRepository,
}

impl PgCreditsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCreditsRepository::new(),
        }
    }
}

#[async_trait]
impl CreditsService for PgCreditsService {
    #[tracing::instrument(
        name = "credits.service.apply_credit_adjustment",
        skip(self, adjustment),
        fields(student_uuid = %student, credits = adjustment.credits),
        err
    )]
    async fn apply_credit_adjustment(
        &self,
        student: StudentUuid,
        adjustment: CreditAdjustment,
    ) -> Result<CreditBalance, CreditsServiceError> {
        let mut tx = self.db.begin().await?;

        let balance = self
            .repository
            .apply_adjustment(&mut tx, student, &adjustment)
            .await?;

        tx.commit().await?;

        info!(
            student_uuid = %student,
            balance = balance.balance,
            "applied credit adjustment"
        );

        Ok(balance)
    }

    #[tracing::instrument(
        name = "credits.service.get_credits",
        skip(self, student),
        fields(student_uuid = %student),
        err
    )]
    async fn get_credits(&self, student: StudentUuid) -> Result<CreditsLedger, CreditsServiceError> {
        let mut tx = self.db.begin().await?;

        let ledger = self.repository.get_credits(&mut tx, student).await?;

        tx.commit().await?;

        Ok(ledger)
    }
}

#[automock]
#[async_trait]
pub trait CreditsService: Send + Sync {
    /// Add a signed credit delta to the student's balance and record why.
    async fn apply_credit_adjustment(
        &self,
        student: StudentUuid,
        adjustment: CreditAdjustment,
    ) -> Result<CreditBalance, CreditsServiceError>;

    /// The student's balance and full ledger.
    async fn get_credits(&self, student: StudentUuid) -> Result<CreditsLedger, CreditsServiceError>;
}
