//! Payments Data

use jiff::Timestamp;

use crate::domain::{
    academies::records::AcademyUuid,
    courses::records::CourseUuid,
    payments::errors::PaymentsServiceError,
    students::records::StudentUuid,
    tutors::records::TutorUuid,
};

/// New Payment Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub transaction_id: String,
    pub student_uuid: StudentUuid,
    pub academy_uuid: Option<AcademyUuid>,
    pub tutor_uuid: Option<TutorUuid>,
    pub course_uuid: Option<CourseUuid>,
    pub amount: u64,
    pub commission: u64,
    pub payment_method: String,
    pub payment_date: Timestamp,
    pub valid_upto: Option<Timestamp>,
    pub is_manual_entry: bool,
}

impl NewPayment {
    /// Check the payment before it is written.
    ///
    /// # Errors
    ///
    /// Returns an error when the transaction id is blank, an amount does not
    /// fit the storage column, the commission exceeds the amount, or coverage
    /// ends before the payment was made.
    pub fn validate(&self) -> Result<(), PaymentsServiceError> {
        if self.transaction_id.trim().is_empty() {
            return Err(PaymentsServiceError::InvalidTransactionId);
        }

        i64::try_from(self.amount)?;
        i64::try_from(self.commission)?;

        if self.commission > self.amount {
            return Err(PaymentsServiceError::CommissionExceedsAmount);
        }

        if self
            .valid_upto
            .is_some_and(|valid_upto| valid_upto < self.payment_date)
        {
            return Err(PaymentsServiceError::ValidityBeforePaymentDate);
        }

        Ok(())
    }
}

/// Half-open reporting window `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenueWindow {
    pub from: Timestamp,
    pub to: Timestamp,
}

impl RevenueWindow {
    /// Build a window, rejecting empty or inverted ranges.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentsServiceError::InvalidWindow`] when `from >= to`.
    pub fn new(from: Timestamp, to: Timestamp) -> Result<Self, PaymentsServiceError> {
        if from >= to {
            return Err(PaymentsServiceError::InvalidWindow);
        }

        Ok(Self { from, to })
    }
}
