//! Get Credits Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use academy_app::domain::credits::records::{CreditEntry, CreditsLedger};

use crate::{credits::errors::into_status_error, extensions::*};

/// Credit Ledger Entry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreditEntryResponse {
    pub message: String,
    pub credits: i64,
}

impl From<CreditEntry> for CreditEntryResponse {
    fn from(entry: CreditEntry) -> Self {
        CreditEntryResponse {
            message: entry.message,
            credits: entry.credits,
        }
    }
}

/// Credits Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreditsResponse {
    pub student_uuid: Uuid,
    pub balance: i64,

    /// Adjustments in the order they were applied
    pub ledger: Vec<CreditEntryResponse>,

    /// Whether the balance equals the sum of the ledger
    pub consistent: bool,
}

impl From<CreditsLedger> for CreditsResponse {
    fn from(ledger: CreditsLedger) -> Self {
        let consistent = ledger.is_consistent();

        CreditsResponse {
            student_uuid: ledger.student_uuid.into(),
            balance: ledger.balance,
            ledger: ledger.entries.into_iter().map(Into::into).collect(),
            consistent,
        }
    }
}

/// Get Credits Handler
#[endpoint(tags("students"), summary = "Get Credits")]
pub(crate) async fn handler(
    student: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CreditsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let ledger = state
        .app
        .credits
        .get_credits(student.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ledger.into()))
}
