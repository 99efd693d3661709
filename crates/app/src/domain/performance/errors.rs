//! Performance service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PerformanceServiceError {
    #[error("tutor not found")]
    NotFound,

    #[error("course not found")]
    CourseNotFound,

    #[error("student not found")]
    InvalidReference,

    #[error("score {0} is outside 0-100")]
    InvalidScore(f64),

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl PerformanceServiceError {
    pub(crate) fn course(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::CourseNotFound,
            other => Self::from(other),
        }
    }
}

impl From<Error> for PerformanceServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if matches!(error, Error::ColumnDecode { .. }) {
            return Self::InvalidData;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
