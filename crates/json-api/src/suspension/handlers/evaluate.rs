//! Evaluate Suspension Handler

use std::string::ToString;

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use academy_app::domain::suspension::evaluator::SuspensionStatus;

use crate::{extensions::*, suspension::errors::into_status_error};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SuspensionResponse {
    /// Whether the student's access is revoked
    pub is_suspended: bool,

    /// Why the decision was reached
    pub reason: String,

    /// Coverage end of the payment the decision was based on
    pub valid_upto: Option<String>,

    /// Last instant before access is revoked
    pub suspension_date: Option<String>,

    /// Grace days applied after coverage ends
    pub auto_suspend_after: Option<u16>,
}

impl From<SuspensionStatus> for SuspensionResponse {
    fn from(status: SuspensionStatus) -> Self {
        SuspensionResponse {
            is_suspended: status.is_suspended,
            reason: status.reason.as_str().to_string(),
            valid_upto: status.valid_upto.as_ref().map(ToString::to_string),
            suspension_date: status.suspension_date.as_ref().map(ToString::to_string),
            auto_suspend_after: status.auto_suspend_after,
        }
    }
}

/// Evaluate Suspension Handler
///
/// Decides whether the student is suspended at `at` (defaults to now).
#[endpoint(tags("students"), summary = "Evaluate Suspension")]
pub(crate) async fn handler(
    student: PathParam<Uuid>,
    at: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<SuspensionResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let point_in_time = at.into_point_in_time()?;

    let status = state
        .app
        .suspension
        .evaluate_suspension(student.into_inner().into(), point_in_time)
        .await
        .map_err(into_status_error)?;

    Ok(Json(status.into()))
}
