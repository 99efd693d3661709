//! Payments Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{
    academies::records::AcademyUuid,
    courses::records::CourseUuid,
    payments::{
        data::{NewPayment, RevenueWindow},
        records::{PaymentRecord, PaymentStatus},
    },
    students::records::StudentUuid,
    tutors::records::TutorUuid,
};

const CREATE_PAYMENT_SQL: &str = include_str!("sql/create_payment.sql");
const LIST_STUDENT_PAID_PAYMENTS_SQL: &str = include_str!("sql/list_student_paid_payments.sql");
const LIST_ACADEMY_PAID_PAYMENTS_SQL: &str = include_str!("sql/list_academy_paid_payments.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPaymentsRepository;

impl PgPaymentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_payment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        payment: &NewPayment,
    ) -> Result<PaymentRecord, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(CREATE_PAYMENT_SQL)
            .bind(payment.transaction_id.trim())
            .bind(payment.student_uuid.into_uuid())
            .bind(payment.academy_uuid.map(AcademyUuid::into_uuid))
            .bind(payment.tutor_uuid.map(TutorUuid::into_uuid))
            .bind(payment.course_uuid.map(CourseUuid::into_uuid))
            .bind(to_minor_units("amount", payment.amount)?)
            .bind(to_minor_units("commission", payment.commission)?)
            .bind(PaymentStatus::Paid.as_str())
            .bind(&payment.payment_method)
            .bind(SqlxTimestamp::from(payment.payment_date))
            .bind(payment.valid_upto.map(SqlxTimestamp::from))
            .bind(payment.is_manual_entry)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_student_paid_payments(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        student: StudentUuid,
    ) -> Result<Vec<PaymentRecord>, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(LIST_STUDENT_PAID_PAYMENTS_SQL)
            .bind(student.into_uuid())
            .bind(PaymentStatus::Paid.as_str())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_academy_paid_payments(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        academy: AcademyUuid,
        window: RevenueWindow,
    ) -> Result<Vec<PaymentRecord>, sqlx::Error> {
        query_as::<Postgres, PaymentRecord>(LIST_ACADEMY_PAID_PAYMENTS_SQL)
            .bind(academy.into_uuid())
            .bind(PaymentStatus::Paid.as_str())
            .bind(SqlxTimestamp::from(window.from))
            .bind(SqlxTimestamp::from(window.to))
            .fetch_all(&mut **tx)
            .await
    }
}

fn to_minor_units(column: &str, value: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

fn from_minor_units(row: &PgRow, column: &str) -> Result<u64, sqlx::Error> {
    let value: i64 = row.try_get(column)?;

    u64::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for PaymentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<PaymentStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            transaction_id: row.try_get("transaction_id")?,
            student_uuid: StudentUuid::from_uuid(row.try_get("student_uuid")?),
            academy_uuid: row
                .try_get::<Option<Uuid>, _>("academy_uuid")?
                .map(AcademyUuid::from_uuid),
            tutor_uuid: row
                .try_get::<Option<Uuid>, _>("tutor_uuid")?
                .map(TutorUuid::from_uuid),
            course_uuid: row
                .try_get::<Option<Uuid>, _>("course_uuid")?
                .map(CourseUuid::from_uuid),
            amount: from_minor_units(row, "amount")?,
            commission: from_minor_units(row, "commission")?,
            status,
            payment_method: row.try_get("payment_method")?,
            payment_date: row.try_get::<SqlxTimestamp, _>("payment_date")?.to_jiff(),
            valid_upto: row
                .try_get::<Option<SqlxTimestamp>, _>("valid_upto")?
                .map(SqlxTimestamp::to_jiff),
            is_manual_entry: row.try_get("is_manual_entry")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
