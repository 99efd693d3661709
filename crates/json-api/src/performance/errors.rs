//! Performance Errors

use salvo::http::StatusError;
use tracing::error;

use academy_app::domain::performance::PerformanceServiceError;

pub(crate) fn into_status_error(error: PerformanceServiceError) -> StatusError {
    match error {
        PerformanceServiceError::NotFound => StatusError::not_found().brief("Tutor not found"),
        PerformanceServiceError::CourseNotFound => {
            StatusError::not_found().brief("Course not found")
        }
        PerformanceServiceError::InvalidReference => {
            StatusError::not_found().brief("Student not found")
        }
        error @ PerformanceServiceError::InvalidScore(_) => {
            StatusError::bad_request().brief(error.to_string())
        }
        PerformanceServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid performance payload")
        }
        PerformanceServiceError::Sql(source) => {
            error!("failed to process performance: {source}");

            StatusError::internal_server_error()
        }
    }
}
