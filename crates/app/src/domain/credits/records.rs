//! Credits Records

use serde::{Deserialize, Serialize};

use crate::domain::students::records::StudentUuid;

/// Credit Entry
///
/// One adjustment in a student's ledger, stored as `{message, credits}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditEntry {
    pub message: String,
    pub credits: i64,
}

/// Balance after an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditBalance {
    pub student_uuid: StudentUuid,
    pub balance: i64,
}

/// A student's cached balance alongside the ledger it summarises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditsLedger {
    pub student_uuid: StudentUuid,
    pub balance: i64,
    pub entries: Vec<CreditEntry>,
}

impl CreditsLedger {
    /// Sum of every delta in the ledger.
    #[must_use]
    pub fn ledger_total(&self) -> i128 {
        self.entries
            .iter()
            .map(|entry| i128::from(entry.credits))
            .sum()
    }

    /// Whether the cached balance agrees with the ledger.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.ledger_total() == i128::from(self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str, credits: i64) -> CreditEntry {
        CreditEntry {
            message: message.to_string(),
            credits,
        }
    }

    #[test]
    fn empty_ledger_with_zero_balance_is_consistent() {
        let ledger = CreditsLedger {
            student_uuid: StudentUuid::new(),
            balance: 0,
            entries: vec![],
        };

        assert!(ledger.is_consistent());
    }

    #[test]
    fn drifted_cache_is_reported() {
        let ledger = CreditsLedger {
            student_uuid: StudentUuid::new(),
            balance: 15,
            entries: vec![entry("signup", 10), entry("late cancel", -3), entry("refill", 5)],
        };

        assert_eq!(ledger.ledger_total(), 12);
        assert!(!ledger.is_consistent());
    }

    #[test]
    fn entries_serialise_as_message_and_credits() -> Result<(), serde_json::Error> {
        let json = serde_json::to_value(entry("signup", 10))?;

        assert_eq!(json, serde_json::json!({ "message": "signup", "credits": 10 }));

        Ok(())
    }
}
