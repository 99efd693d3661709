//! Payment fixtures for unit tests.

use jiff::Timestamp;

use crate::domain::{
    payments::records::{PaymentRecord, PaymentStatus},
    students::records::StudentUuid,
};

/// A `Paid` card payment made at `payment_date`, covering until `valid_upto`.
pub(crate) fn paid(
    student: StudentUuid,
    transaction_id: &str,
    payment_date: &str,
    valid_upto: Option<&str>,
) -> Result<PaymentRecord, jiff::Error> {
    let payment_date: Timestamp = payment_date.parse()?;

    Ok(PaymentRecord {
        transaction_id: transaction_id.to_string(),
        student_uuid: student,
        academy_uuid: None,
        tutor_uuid: None,
        course_uuid: None,
        amount: 1_000,
        commission: 100,
        status: PaymentStatus::Paid,
        payment_method: "card".to_string(),
        payment_date,
        valid_upto: valid_upto.map(str::parse).transpose()?,
        is_manual_entry: false,
        created_at: payment_date,
    })
}
