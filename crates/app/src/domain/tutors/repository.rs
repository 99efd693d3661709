//! Tutors Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{
    academies::records::AcademyUuid,
    tutors::records::{TutorRecord, TutorUuid},
};

const GET_TUTOR_SQL: &str = include_str!("sql/get_tutor.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTutorsRepository;

impl PgTutorsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_tutor(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tutor: TutorUuid,
    ) -> Result<TutorRecord, sqlx::Error> {
        query_as::<Postgres, TutorRecord>(GET_TUTOR_SQL)
            .bind(tutor.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for TutorRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: TutorUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            academy_uuid: row
                .try_get::<Option<Uuid>, _>("academy_uuid")?
                .map(AcademyUuid::from_uuid),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
