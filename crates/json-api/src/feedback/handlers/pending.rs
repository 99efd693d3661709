//! Pending Feedback Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use academy_app::domain::feedback::pending::PendingFeedback;

use crate::{extensions::*, feedback::errors::into_status_error};

/// Pending Feedback Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PendingFeedbackResponse {
    pub tutor_uuid: Uuid,

    /// Feedback still owed; negative when more was given than needed
    pub pending_feedback: i64,

    pub student_count: u64,
    pub past_class_count: u64,
    pub feedback_needed: u64,
    pub feedback_given: u64,
}

fn into_response(tutor: Uuid, pending: PendingFeedback) -> PendingFeedbackResponse {
    PendingFeedbackResponse {
        tutor_uuid: tutor,
        pending_feedback: pending.pending_feedback,
        student_count: pending.student_count,
        past_class_count: pending.past_class_count,
        feedback_needed: pending.feedback_needed,
        feedback_given: pending.feedback_given,
    }
}

/// Pending Feedback Handler
///
/// Counts classes ending before `at` (defaults to now).
#[endpoint(tags("tutors"), summary = "Pending Feedback")]
pub(crate) async fn handler(
    tutor: PathParam<Uuid>,
    at: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<PendingFeedbackResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let tutor = tutor.into_inner();
    let point_in_time = at.into_point_in_time()?;

    let pending = state
        .app
        .feedback
        .compute_pending_feedback(tutor.into(), point_in_time)
        .await
        .map_err(into_status_error)?;

    Ok(Json(into_response(tutor, pending)))
}
