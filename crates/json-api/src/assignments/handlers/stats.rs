//! Assignment Stats Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use academy_app::domain::{assignments::stats::AssignmentStatsByClass, courses::records::ClassUuid};

use crate::{assignments::errors::into_status_error, extensions::*};

/// Completion flags for one class
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClassStatsResponse {
    pub class_uuid: Uuid,

    /// 1 when the student submitted anything in the class
    pub total_student_assignments: u32,

    /// 1 when one of those submissions is approved
    pub completed_assignments: u32,
}

/// Assignment Stats Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssignmentStatsResponse {
    pub student_uuid: Uuid,

    /// One entry per requested class, ordered by class UUID
    pub classes: Vec<ClassStatsResponse>,
}

fn into_response(student: Uuid, stats: AssignmentStatsByClass) -> AssignmentStatsResponse {
    AssignmentStatsResponse {
        student_uuid: student,
        classes: stats
            .into_iter()
            .map(|(class, stats)| ClassStatsResponse {
                class_uuid: class.into(),
                total_student_assignments: stats.total_student_assignments,
                completed_assignments: stats.completed_assignments,
            })
            .collect(),
    }
}

fn parse_classes(classes: &str) -> Result<Vec<ClassUuid>, StatusError> {
    classes
        .split(',')
        .map(str::trim)
        .filter(|class| !class.is_empty())
        .map(|class| Uuid::parse_str(class).map(ClassUuid::from_uuid))
        .collect::<Result<Vec<_>, _>>()
        .or_400("could not parse \"classes\" query parameter")
}

/// Assignment Stats Handler
///
/// `classes` is a comma-separated list of class UUIDs.
#[endpoint(tags("students"), summary = "Assignment Stats")]
pub(crate) async fn handler(
    student: PathParam<Uuid>,
    classes: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<AssignmentStatsResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let student = student.into_inner();
    let classes = parse_classes(&classes.into_inner())?;

    let stats = state
        .app
        .assignments
        .compute_assignment_stats(student.into(), classes)
        .await
        .map_err(into_status_error)?;

    Ok(Json(into_response(student, stats)))
}
