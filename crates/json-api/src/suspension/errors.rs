//! Suspension Errors

use salvo::http::StatusError;
use tracing::error;

use academy_app::domain::suspension::SuspensionServiceError;

pub(crate) fn into_status_error(error: SuspensionServiceError) -> StatusError {
    match error {
        SuspensionServiceError::StudentNotFound => {
            StatusError::not_found().brief("Student not found")
        }
        SuspensionServiceError::AcademyNotFound => {
            StatusError::not_found().brief("Academy not found")
        }
        SuspensionServiceError::DateOutOfRange(source) => {
            error!("failed to compute suspension date: {source}");

            StatusError::internal_server_error()
        }
        SuspensionServiceError::Sql(source) => {
            error!("failed to evaluate suspension: {source}");

            StatusError::internal_server_error()
        }
    }
}
