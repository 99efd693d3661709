//! Payment Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;

use crate::domain::{
    academies::records::AcademyUuid, courses::records::CourseUuid,
    students::records::StudentUuid, tutors::records::TutorUuid,
};

/// Payment Status
///
/// Checkout and manual entry only ever produce `Paid`; rows carrying any
/// other status are ignored by every computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
}

impl PaymentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a status this system does not produce.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment status: {0}")]
pub struct UnknownPaymentStatus(pub String);

impl FromStr for PaymentStatus {
    type Err = UnknownPaymentStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Paid" => Ok(Self::Paid),
            other => Err(UnknownPaymentStatus(other.to_string())),
        }
    }
}

/// Payment Record
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    pub transaction_id: String,
    pub student_uuid: StudentUuid,
    pub academy_uuid: Option<AcademyUuid>,
    pub tutor_uuid: Option<TutorUuid>,
    pub course_uuid: Option<CourseUuid>,

    /// Amount charged, in minor currency units.
    pub amount: u64,

    /// Platform commission taken from `amount`, in minor currency units.
    pub commission: u64,

    pub status: PaymentStatus,
    pub payment_method: String,
    pub payment_date: Timestamp,

    /// End of the paid coverage window.
    pub valid_upto: Option<Timestamp>,

    pub is_manual_entry: bool,
    pub created_at: Timestamp,
}
