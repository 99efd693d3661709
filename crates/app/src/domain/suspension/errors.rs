//! Suspension service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuspensionServiceError {
    #[error("student not found")]
    StudentNotFound,

    #[error("academy not found")]
    AcademyNotFound,

    #[error("suspension date is outside the supported calendar range")]
    DateOutOfRange(#[source] jiff::Error),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl SuspensionServiceError {
    pub(crate) fn student(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::StudentNotFound,
            other => Self::Sql(other),
        }
    }

    pub(crate) fn academy(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::AcademyNotFound,
            other => Self::Sql(other),
        }
    }
}

impl From<Error> for SuspensionServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}

impl From<jiff::Error> for SuspensionServiceError {
    fn from(error: jiff::Error) -> Self {
        Self::DateOutOfRange(error)
    }
}
