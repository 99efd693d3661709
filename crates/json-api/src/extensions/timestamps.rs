//! RFC 3339 timestamp fields in queries and request bodies.

use jiff::Timestamp;
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

/// Parse a required timestamp, naming `field` in the 400 brief.
pub(crate) fn parse_timestamp(value: &str, field: &str) -> Result<Timestamp, StatusError> {
    value
        .trim()
        .parse::<Timestamp>()
        .or_400(&format!("could not parse \"{field}\""))
}

pub(crate) fn parse_optional_timestamp(
    value: Option<&str>,
    field: &str,
) -> Result<Option<Timestamp>, StatusError> {
    value.map(|value| parse_timestamp(value, field)).transpose()
}

pub(crate) trait PointInTimeExt {
    /// The `at` query parameter, or now when absent.
    fn into_point_in_time(self) -> Result<Timestamp, StatusError>;
}

impl PointInTimeExt for QueryParam<String, false> {
    fn into_point_in_time(self) -> Result<Timestamp, StatusError> {
        parse_optional_timestamp(self.into_inner().as_deref(), "at")
            .map(|at| at.unwrap_or_else(Timestamp::now))
    }
}
