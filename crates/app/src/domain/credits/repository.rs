//! Credits Repository

use sqlx::{Postgres, Row, Transaction, query, types::Json};

use crate::domain::{
    credits::{
        data::CreditAdjustment,
        records::{CreditBalance, CreditEntry, CreditsLedger},
    },
    students::records::StudentUuid,
};

const APPLY_CREDIT_ADJUSTMENT_SQL: &str = include_str!("sql/apply_credit_adjustment.sql");
const GET_CREDITS_SQL: &str = include_str!("sql/get_credits.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCreditsRepository;

impl PgCreditsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Increment the cached balance and append the ledger entry in one
    /// statement, so concurrent adjustments serialise on the student row.
    pub(crate) async fn apply_adjustment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        student: StudentUuid,
        adjustment: &CreditAdjustment,
    ) -> Result<CreditBalance, sqlx::Error> {
        let row = query(APPLY_CREDIT_ADJUSTMENT_SQL)
            .bind(student.into_uuid())
            .bind(adjustment.credits)
            .bind(&adjustment.message)
            .fetch_one(&mut **tx)
            .await?;

        Ok(CreditBalance {
            student_uuid: StudentUuid::from_uuid(row.try_get("uuid")?),
            balance: row.try_get("credits")?,
        })
    }

    pub(crate) async fn get_credits(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        student: StudentUuid,
    ) -> Result<CreditsLedger, sqlx::Error> {
        let row = query(GET_CREDITS_SQL)
            .bind(student.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        let Json(entries) = row.try_get::<Json<Vec<CreditEntry>>, _>("credits_input")?;

        Ok(CreditsLedger {
            student_uuid: StudentUuid::from_uuid(row.try_get("uuid")?),
            balance: row.try_get("credits")?,
            entries,
        })
    }
}
