//! Academy revenue summary.

use crate::domain::payments::records::{PaymentRecord, PaymentStatus};

/// Totals over the `Paid` payments in a reporting window, in minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevenueSummary {
    pub payment_count: u64,
    pub gross_amount: u64,
    pub total_commission: u64,

    /// What the academy keeps after commission.
    pub net_amount: u64,
}

impl RevenueSummary {
    #[must_use]
    pub fn from_payments<'a>(payments: impl IntoIterator<Item = &'a PaymentRecord>) -> Self {
        payments
            .into_iter()
            .filter(|payment| payment.status == PaymentStatus::Paid)
            .fold(Self::default(), |summary, payment| Self {
                payment_count: summary.payment_count.saturating_add(1),
                gross_amount: summary.gross_amount.saturating_add(payment.amount),
                total_commission: summary.total_commission.saturating_add(payment.commission),
                net_amount: summary
                    .net_amount
                    .saturating_add(payment.amount.saturating_sub(payment.commission)),
            })
    }
}
