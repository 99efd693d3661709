//! Feedback Errors

use salvo::http::StatusError;
use tracing::error;

use academy_app::domain::feedback::FeedbackServiceError;

pub(crate) fn into_status_error(error: FeedbackServiceError) -> StatusError {
    match error {
        FeedbackServiceError::AlreadyExists => {
            StatusError::conflict().brief("Feedback already recorded")
        }
        FeedbackServiceError::NotFound => StatusError::not_found().brief("Tutor not found"),
        FeedbackServiceError::InvalidReference => {
            StatusError::bad_request().brief("Student or class not found")
        }
        error @ (FeedbackServiceError::NoRatings
        | FeedbackServiceError::UnknownAttribute { .. }
        | FeedbackServiceError::RatingOutOfRange { .. }) => {
            StatusError::bad_request().brief(error.to_string())
        }
        FeedbackServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid feedback payload")
        }
        FeedbackServiceError::Sql(source) => {
            error!("failed to process feedback: {source}");

            StatusError::internal_server_error()
        }
    }
}
