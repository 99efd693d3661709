//! Submit Performance Score Handler

use jiff::Timestamp;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use academy_app::domain::performance::data::NewPerformanceScore;

use crate::{extensions::*, performance::errors::into_status_error};

/// Performance Score Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PerformanceScoreRequest {
    /// 0 through 100
    pub score: f64,

    /// RFC 3339 timestamp; defaults to now
    pub scored_at: Option<String>,
}

/// Performance Score Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PerformanceScoreResponse {
    pub course_uuid: Uuid,
    pub student_uuid: Uuid,
    pub score: f64,
    pub scored_at: String,
}

/// Submit Performance Score Handler
///
/// Replaces any earlier score for the same course and student.
#[endpoint(
    tags("courses"),
    summary = "Submit Performance Score",
    responses(
        (status_code = StatusCode::OK, description = "Score stored"),
        (status_code = StatusCode::NOT_FOUND, description = "Course or student not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    course: PathParam<Uuid>,
    student: PathParam<Uuid>,
    json: JsonBody<PerformanceScoreRequest>,
    depot: &mut Depot,
) -> Result<Json<PerformanceScoreResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();

    let scored_at = parse_optional_timestamp(request.scored_at.as_deref(), "scoredAt")?
        .unwrap_or_else(Timestamp::now);

    let record = state
        .app
        .performance
        .submit_performance_score(NewPerformanceScore {
            course_uuid: course.into_inner().into(),
            student_uuid: student.into_inner().into(),
            score: request.score,
            scored_at,
        })
        .await
        .map_err(into_status_error)?;

    Ok(Json(PerformanceScoreResponse {
        course_uuid: record.course_uuid.into(),
        student_uuid: record.student_uuid.into(),
        score: record.score,
        scored_at: record.scored_at.to_string(),
    }))
}
