//! Performance Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::{
    domain::{
        courses::records::CourseUuid,
        performance::{data::NewPerformanceScore, records::PerformanceScoreRecord},
        students::records::StudentUuid,
    },
    uuids::into_uuids,
};

const UPSERT_SCORE_SQL: &str = include_str!("sql/upsert_score.sql");
const LIST_COURSE_SCORES_SQL: &str = include_str!("sql/list_course_scores.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPerformanceRepository;

impl PgPerformanceRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn upsert_score(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        score: &NewPerformanceScore,
    ) -> Result<PerformanceScoreRecord, sqlx::Error> {
        query_as::<Postgres, PerformanceScoreRecord>(UPSERT_SCORE_SQL)
            .bind(score.course_uuid.into_uuid())
            .bind(score.student_uuid.into_uuid())
            .bind(score.score)
            .bind(SqlxTimestamp::from(score.scored_at))
            .fetch_one(&mut **tx)
            .await
    }

    /// Every score recorded in any of `courses`.
    pub(crate) async fn list_course_scores(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        courses: &[CourseUuid],
    ) -> Result<Vec<f64>, sqlx::Error> {
        query_scalar(LIST_COURSE_SCORES_SQL)
            .bind(into_uuids(courses))
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for PerformanceScoreRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            course_uuid: CourseUuid::from_uuid(row.try_get("course_uuid")?),
            student_uuid: StudentUuid::from_uuid(row.try_get("student_uuid")?),
            score: row.try_get("score")?,
            scored_at: row.try_get::<SqlxTimestamp, _>("scored_at")?.to_jiff(),
        })
    }
}
