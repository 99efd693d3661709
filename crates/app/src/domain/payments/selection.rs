//! Current payment selection.

use std::cmp::Ordering;

use crate::domain::payments::records::{PaymentRecord, PaymentStatus};

/// The payment whose coverage currently applies to a student.
///
/// Among `Paid` payments the latest `valid_upto` wins, with undated
/// coverage ranking below any dated one. Ties go to the later
/// `payment_date`, then to the greater `transaction_id`, so the result does
/// not depend on the order rows were returned in.
#[must_use]
pub fn current_payment(payments: &[PaymentRecord]) -> Option<&PaymentRecord> {
    payments
        .iter()
        .filter(|payment| payment.status == PaymentStatus::Paid)
        .max_by(|a, b| coverage_order(a, b))
}

fn coverage_order(a: &PaymentRecord, b: &PaymentRecord) -> Ordering {
    a.valid_upto
        .cmp(&b.valid_upto)
        .then_with(|| a.payment_date.cmp(&b.payment_date))
        .then_with(|| a.transaction_id.cmp(&b.transaction_id))
}
