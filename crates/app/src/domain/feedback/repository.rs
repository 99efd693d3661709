//! Feedback Repository

use std::collections::BTreeMap;

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar, types::Json};

use crate::{
    domain::{
        courses::records::ClassUuid,
        feedback::{
            data::NewFeedback,
            records::{FeedbackRecord, FeedbackUuid},
            subjects::Subject,
        },
        students::records::StudentUuid,
    },
    uuids::into_uuids,
};

const CREATE_FEEDBACK_SQL: &str = include_str!("sql/create_feedback.sql");
const COUNT_FEEDBACK_SQL: &str = include_str!("sql/count_feedback.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgFeedbackRepository;

impl PgFeedbackRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_feedback(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        feedback: &NewFeedback,
    ) -> Result<FeedbackRecord, sqlx::Error> {
        query_as::<Postgres, FeedbackRecord>(CREATE_FEEDBACK_SQL)
            .bind(feedback.uuid.into_uuid())
            .bind(feedback.student_uuid.into_uuid())
            .bind(feedback.class_uuid.into_uuid())
            .bind(feedback.subject.as_str())
            .bind(Json(&feedback.ratings))
            .bind(feedback.comment.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    /// Feedback entries for any of `students` in any of `classes`, across
    /// every subject.
    pub(crate) async fn count_feedback(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        students: &[StudentUuid],
        classes: &[ClassUuid],
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_FEEDBACK_SQL)
            .bind(into_uuids(students))
            .bind(into_uuids(classes))
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
            index: "count".to_string(),
            source: Box::new(e),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for FeedbackRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let subject: String = row.try_get("subject")?;

        let subject = subject
            .parse::<Subject>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "subject".to_string(),
                source: Box::new(e),
            })?;

        let Json(ratings) = row.try_get::<Json<BTreeMap<String, u8>>, _>("ratings")?;

        Ok(Self {
            uuid: FeedbackUuid::from_uuid(row.try_get("uuid")?),
            student_uuid: StudentUuid::from_uuid(row.try_get("student_uuid")?),
            class_uuid: ClassUuid::from_uuid(row.try_get("class_uuid")?),
            subject,
            ratings,
            comment: row.try_get("comment")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
