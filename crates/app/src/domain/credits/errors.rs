//! Credits service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// `numeric_value_out_of_range`
const NUMERIC_OUT_OF_RANGE: &str = "22003";

#[derive(Debug, Error)]
pub enum CreditsServiceError {
    #[error("student not found")]
    NotFound,

    #[error("credit adjustment must not be zero")]
    ZeroAdjustment,

    #[error("credit adjustment requires a message")]
    EmptyMessage,

    #[error("credit balance out of range")]
    BalanceOutOfRange,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CreditsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if matches!(error, Error::ColumnDecode { .. }) {
            return Self::InvalidData;
        }

        let Some(database_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        if database_error.code().as_deref() == Some(NUMERIC_OUT_OF_RANGE) {
            return Self::BalanceOutOfRange;
        }

        match database_error.kind() {
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}
