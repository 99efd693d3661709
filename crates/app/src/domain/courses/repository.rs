//! Courses Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    domain::{
        courses::records::{ClassUuid, CourseRecord, CourseUuid},
        students::records::StudentUuid,
        tutors::records::TutorUuid,
    },
    uuids::into_uuids,
};

const GET_COURSE_SQL: &str = include_str!("sql/get_course.sql");
const LIST_TUTOR_COURSES_SQL: &str = include_str!("sql/list_tutor_courses.sql");
const LIST_PAST_CLASSES_SQL: &str = include_str!("sql/list_past_classes.sql");
const COUNT_ENROLLED_STUDENTS_SQL: &str = include_str!("sql/count_enrolled_students.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCoursesRepository;

impl PgCoursesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_course(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        course: CourseUuid,
    ) -> Result<CourseRecord, sqlx::Error> {
        query_as::<Postgres, CourseRecord>(GET_COURSE_SQL)
            .bind(course.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_tutor_courses(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tutor: TutorUuid,
    ) -> Result<Vec<CourseRecord>, sqlx::Error> {
        query_as::<Postgres, CourseRecord>(LIST_TUTOR_COURSES_SQL)
            .bind(tutor.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Distinct classes of the students' enrolled courses that ended before `at`.
    pub(crate) async fn list_past_classes(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        students: &[StudentUuid],
        at: Timestamp,
    ) -> Result<Vec<ClassUuid>, sqlx::Error> {
        let uuids: Vec<Uuid> = query_scalar(LIST_PAST_CLASSES_SQL)
            .bind(into_uuids(students))
            .bind(SqlxTimestamp::from(at))
            .fetch_all(&mut **tx)
            .await?;

        Ok(uuids.into_iter().map(ClassUuid::from_uuid).collect())
    }

    pub(crate) async fn count_enrolled_students(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        courses: &[CourseUuid],
    ) -> Result<u64, sqlx::Error> {
        let count: i64 = query_scalar(COUNT_ENROLLED_STUDENTS_SQL)
            .bind(into_uuids(courses))
            .fetch_one(&mut **tx)
            .await?;

        u64::try_from(count).map_err(|e| sqlx::Error::ColumnDecode {
            index: "count".to_string(),
            source: Box::new(e),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CourseRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CourseUuid::from_uuid(row.try_get("uuid")?),
            tutor_uuid: TutorUuid::from_uuid(row.try_get("tutor_uuid")?),
            name: row.try_get("name")?,
            course_quality: row.try_get("course_quality")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
