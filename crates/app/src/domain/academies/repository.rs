//! Academies Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use serde_json::Value;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, types::Json};

use crate::domain::academies::{
    policies::PolicySettings,
    records::{AcademyRecord, AcademyUuid},
};

const GET_ACADEMY_SQL: &str = include_str!("sql/get_academy.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAcademiesRepository;

impl PgAcademiesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_academy(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        academy: AcademyUuid,
    ) -> Result<AcademyRecord, sqlx::Error> {
        query_as::<Postgres, AcademyRecord>(GET_ACADEMY_SQL)
            .bind(academy.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for AcademyRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(policies) = row.try_get::<Json<Value>, _>("policies_settings")?;

        Ok(Self {
            uuid: AcademyUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            policies: PolicySettings::from_json(policies),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
