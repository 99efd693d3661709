//! Feedback service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::feedback::subjects::Subject;

#[derive(Debug, Error)]
pub enum FeedbackServiceError {
    #[error("feedback already recorded for this student, class and subject")]
    AlreadyExists,

    #[error("tutor not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("feedback requires at least one rating")]
    NoRatings,

    #[error("{attribute} is not rated for {subject}")]
    UnknownAttribute { subject: Subject, attribute: String },

    #[error("rating {rating} for {attribute} is outside 1-5")]
    RatingOutOfRange { attribute: String, rating: u8 },

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for FeedbackServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if matches!(error, Error::ColumnDecode { .. }) {
            return Self::InvalidData;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
