//! Credits Errors

use salvo::http::StatusError;
use tracing::error;

use academy_app::domain::credits::CreditsServiceError;

pub(crate) fn into_status_error(error: CreditsServiceError) -> StatusError {
    match error {
        CreditsServiceError::NotFound => StatusError::not_found().brief("Student not found"),
        CreditsServiceError::ZeroAdjustment => {
            StatusError::bad_request().brief("Credit adjustment must not be zero")
        }
        CreditsServiceError::EmptyMessage => {
            StatusError::bad_request().brief("Credit adjustment requires a message")
        }
        CreditsServiceError::BalanceOutOfRange => {
            StatusError::unprocessable_entity().brief("Credit balance would overflow")
        }
        CreditsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid credits payload")
        }
        CreditsServiceError::Sql(source) => {
            error!("failed to update credits: {source}");

            StatusError::internal_server_error()
        }
    }
}
