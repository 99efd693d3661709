//! Suspension evaluator.

use jiff::{
    Timestamp, ToSpan, Zoned,
    civil::Date,
    tz::TimeZone,
};

use crate::domain::{
    academies::policies::PolicySettings,
    payments::records::PaymentRecord,
    suspension::errors::SuspensionServiceError,
};

/// Why a student is, or is not, suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspensionReason {
    /// Independent students are never auto-suspended.
    NoAcademy,

    /// No `Paid` payment exists for the student.
    NoPaymentFound,

    /// The current payment has no coverage end date.
    NoValidityDate,

    /// Inside the paid coverage window.
    Active,

    /// Coverage has ended but the grace period has not.
    GracePeriod,

    /// Coverage and grace period have both ended.
    Expired,
}

impl SuspensionReason {
    /// Whether this reason revokes access.
    #[must_use]
    pub const fn is_suspended(self) -> bool {
        matches!(
            self,
            Self::NoPaymentFound | Self::NoValidityDate | Self::Expired
        )
    }

    /// Snake-case label used in responses and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoAcademy => "no_academy",
            Self::NoPaymentFound => "no_payment_found",
            Self::NoValidityDate => "no_validity_date",
            Self::Active => "active",
            Self::GracePeriod => "grace_period",
            Self::Expired => "expired",
        }
    }
}

/// Outcome of a suspension evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspensionStatus {
    /// Access is revoked at the evaluation instant.
    pub is_suspended: bool,

    /// The rule that decided `is_suspended`.
    pub reason: SuspensionReason,

    /// Coverage end of the payment used for the decision.
    pub valid_upto: Option<Timestamp>,

    /// Last instant of the final day before access is revoked.
    pub suspension_date: Option<Timestamp>,

    /// Grace days applied; absent for students without an academy.
    pub auto_suspend_after: Option<u16>,
}

impl SuspensionStatus {
    fn new(reason: SuspensionReason, auto_suspend_after: Option<u16>) -> Self {
        Self {
            is_suspended: reason.is_suspended(),
            reason,
            valid_upto: None,
            suspension_date: None,
            auto_suspend_after,
        }
    }
}

/// Evaluate suspension at `at`.
///
/// `policies` is `None` for students without an academy. `payment` is the
/// student's current payment (see
/// [`current_payment`](crate::domain::payments::selection::current_payment)).
/// Day boundaries are taken in `time_zone`: access ends once the day `at`
/// falls on is later than the day `valid_upto` falls on plus the academy's
/// `autoSuspendAfter` days.
///
/// # Errors
///
/// Returns [`SuspensionServiceError::DateOutOfRange`] when the suspension
/// day cannot be represented.
pub fn evaluate(
    policies: Option<&PolicySettings>,
    payment: Option<&PaymentRecord>,
    at: Timestamp,
    time_zone: &TimeZone,
) -> Result<SuspensionStatus, SuspensionServiceError> {
    let Some(policies) = policies else {
        return Ok(SuspensionStatus::new(SuspensionReason::NoAcademy, None));
    };

    let auto_suspend_after = policies.auto_suspend_after();

    let Some(payment) = payment else {
        return Ok(SuspensionStatus::new(
            SuspensionReason::NoPaymentFound,
            Some(auto_suspend_after),
        ));
    };

    let Some(valid_upto) = payment.valid_upto else {
        return Ok(SuspensionStatus::new(
            SuspensionReason::NoValidityDate,
            Some(auto_suspend_after),
        ));
    };

    let coverage_day = valid_upto.to_zoned(time_zone.clone()).date();

    let suspension_day = coverage_day.checked_add(i64::from(auto_suspend_after).days())?;

    let coverage_ends = end_of_day(coverage_day, time_zone)?;
    let suspension_date = end_of_day(suspension_day, time_zone)?;
    let today = end_of_day(at.to_zoned(time_zone.clone()).date(), time_zone)?;

    let reason = if today > suspension_date {
        SuspensionReason::Expired
    } else if today > coverage_ends {
        SuspensionReason::GracePeriod
    } else {
        SuspensionReason::Active
    };

    Ok(SuspensionStatus {
        is_suspended: reason.is_suspended(),
        reason,
        valid_upto: Some(valid_upto),
        suspension_date: Some(suspension_date.timestamp()),
        auto_suspend_after: Some(auto_suspend_after),
    })
}

/// 23:59:59.999 on `date` in `time_zone`.
fn end_of_day(date: Date, time_zone: &TimeZone) -> Result<Zoned, jiff::Error> {
    date.at(23, 59, 59, 999_000_000).to_zoned(time_zone.clone())
}
