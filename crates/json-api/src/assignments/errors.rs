//! Assignments Errors

use salvo::http::StatusError;
use tracing::error;

use academy_app::domain::assignments::AssignmentsServiceError;

pub(crate) fn into_status_error(error: AssignmentsServiceError) -> StatusError {
    match error {
        AssignmentsServiceError::NotFound => StatusError::not_found().brief("Student not found"),
        AssignmentsServiceError::NoClasses => {
            StatusError::bad_request().brief("At least one class is required")
        }
        AssignmentsServiceError::Sql(source) => {
            error!("failed to compute assignment stats: {source}");

            StatusError::internal_server_error()
        }
    }
}
