//! Credits Data

use crate::domain::credits::errors::CreditsServiceError;

/// Credit Adjustment Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditAdjustment {
    /// Signed delta; negative values spend or revoke credits.
    pub credits: i64,

    /// Reason recorded in the ledger.
    pub message: String,
}

impl CreditAdjustment {
    /// Build a validated adjustment. The message is trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error when `credits` is zero or `message` is blank.
    pub fn new(credits: i64, message: impl Into<String>) -> Result<Self, CreditsServiceError> {
        let message = message.into().trim().to_string();

        if credits == 0 {
            return Err(CreditsServiceError::ZeroAdjustment);
        }

        if message.is_empty() {
            return Err(CreditsServiceError::EmptyMessage);
        }

        Ok(Self { credits, message })
    }

    /// The adjustment that cancels this one.
    ///
    /// # Errors
    ///
    /// Returns [`CreditsServiceError::BalanceOutOfRange`] for `i64::MIN`.
    pub fn reversal(&self, message: impl Into<String>) -> Result<Self, CreditsServiceError> {
        let credits = self
            .credits
            .checked_neg()
            .ok_or(CreditsServiceError::BalanceOutOfRange)?;

        Self::new(credits, message)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn trims_message() -> TestResult {
        let adjustment = CreditAdjustment::new(5, "  referral bonus ")?;

        assert_eq!(adjustment.message, "referral bonus");
        assert_eq!(adjustment.credits, 5);

        Ok(())
    }

    #[test]
    fn rejects_zero_delta() {
        assert!(matches!(
            CreditAdjustment::new(0, "nothing"),
            Err(CreditsServiceError::ZeroAdjustment)
        ));
    }

    #[test]
    fn rejects_blank_message() {
        assert!(matches!(
            CreditAdjustment::new(3, " \t"),
            Err(CreditsServiceError::EmptyMessage)
        ));
    }

    #[test]
    fn reversal_is_equal_and_opposite() -> TestResult {
        let adjustment = CreditAdjustment::new(-7, "missed class")?;

        let reversal = adjustment.reversal("missed class waived")?;

        assert_eq!(reversal.credits, 7);
        assert_eq!(reversal.message, "missed class waived");

        Ok(())
    }
}
