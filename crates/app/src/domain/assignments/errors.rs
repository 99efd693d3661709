//! Assignments service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssignmentsServiceError {
    #[error("student not found")]
    NotFound,

    #[error("at least one class is required")]
    NoClasses,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AssignmentsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
