//! Payments Errors

use salvo::http::StatusError;
use tracing::error;

use academy_app::domain::payments::PaymentsServiceError;

pub(crate) fn into_status_error(error: PaymentsServiceError) -> StatusError {
    match error {
        PaymentsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Payment already recorded")
        }
        PaymentsServiceError::NotFound => StatusError::not_found().brief("Academy not found"),
        PaymentsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Referenced student, academy, tutor or course not found")
        }
        PaymentsServiceError::MissingRequiredData | PaymentsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid payment payload")
        }
        error @ (PaymentsServiceError::InvalidTransactionId
        | PaymentsServiceError::CommissionExceedsAmount
        | PaymentsServiceError::ValidityBeforePaymentDate
        | PaymentsServiceError::InvalidWindow
        | PaymentsServiceError::InvalidAmount(_)) => {
            StatusError::bad_request().brief(error.to_string())
        }
        PaymentsServiceError::Sql(source) => {
            error!("failed to process payment: {source}");

            StatusError::internal_server_error()
        }
    }
}
