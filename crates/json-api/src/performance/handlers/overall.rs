//! Overall Performance Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, performance::errors::into_status_error};

/// Overall Performance Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OverallPerformanceResponse {
    pub tutor_uuid: Uuid,

    /// Mean of every submitted score, one decimal
    pub overall_score: f64,

    /// Mean course quality, one decimal
    pub average_course_quality: f64,

    pub total_students: u64,
    pub total_courses: u64,
}

/// Overall Performance Handler
#[endpoint(tags("tutors"), summary = "Overall Performance")]
pub(crate) async fn handler(
    tutor: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OverallPerformanceResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let tutor = tutor.into_inner();

    let overall = state
        .app
        .performance
        .compute_overall_performance(tutor.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(OverallPerformanceResponse {
        tutor_uuid: tutor,
        overall_score: overall.overall_score,
        average_course_quality: overall.average_course_quality,
        total_students: overall.total_students,
        total_courses: overall.total_courses,
    }))
}
