//! Students Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    academies::records::AcademyUuid,
    students::records::{STUDENT_CATEGORY, StudentRecord, StudentUuid},
    tutors::records::TutorUuid,
};

const GET_STUDENT_SQL: &str = include_str!("sql/get_student.sql");
const LIST_TUTOR_STUDENTS_SQL: &str = include_str!("sql/list_tutor_students.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgStudentsRepository;

impl PgStudentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_student(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        student: StudentUuid,
    ) -> Result<StudentRecord, sqlx::Error> {
        query_as::<Postgres, StudentRecord>(GET_STUDENT_SQL)
            .bind(student.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Students taught by `tutor` whose category is [`STUDENT_CATEGORY`].
    pub(crate) async fn list_tutor_students(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tutor: TutorUuid,
    ) -> Result<Vec<StudentUuid>, sqlx::Error> {
        let uuids: Vec<Uuid> = query_scalar(LIST_TUTOR_STUDENTS_SQL)
            .bind(tutor.into_uuid())
            .bind(STUDENT_CATEGORY)
            .fetch_all(&mut **tx)
            .await?;

        Ok(uuids.into_iter().map(StudentUuid::from_uuid).collect())
    }
}

impl<'r> FromRow<'r, PgRow> for StudentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: StudentUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            academy_uuid: row
                .try_get::<Option<Uuid>, _>("academy_uuid")?
                .map(AcademyUuid::from_uuid),
            instructor_uuid: row
                .try_get::<Option<Uuid>, _>("instructor_uuid")?
                .map(TutorUuid::from_uuid),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
