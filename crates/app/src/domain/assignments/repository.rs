//! Assignments Repository

use sqlx::{Postgres, Row, Transaction, query};

use crate::{
    domain::{
        assignments::records::ClassSubmission, courses::records::ClassUuid,
        students::records::StudentUuid,
    },
    uuids::into_uuids,
};

const LIST_CLASS_SUBMISSIONS_SQL: &str = include_str!("sql/list_class_submissions.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAssignmentsRepository;

impl PgAssignmentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_class_submissions(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        student: StudentUuid,
        classes: &[ClassUuid],
    ) -> Result<Vec<ClassSubmission>, sqlx::Error> {
        let rows = query(LIST_CLASS_SUBMISSIONS_SQL)
            .bind(student.into_uuid())
            .bind(into_uuids(classes))
            .fetch_all(&mut **tx)
            .await?;

        rows.iter()
            .map(|row| {
                Ok(ClassSubmission {
                    class_uuid: ClassUuid::from_uuid(row.try_get("class_uuid")?),
                    status: row.try_get("status")?,
                })
            })
            .collect()
    }
}
