//! Reference time zone used for calendar-day boundaries.

use jiff::tz::TimeZone;

pub const DEFAULT_TIME_ZONE: &str = "UTC";

/// Resolve an IANA time zone name such as `Asia/Kolkata`.
///
/// `UTC` is resolved without consulting the time zone database.
///
/// # Errors
///
/// Returns an error when the name is not a known time zone.
pub fn parse_time_zone(name: &str) -> Result<TimeZone, jiff::Error> {
    let name = name.trim();

    if name.eq_ignore_ascii_case(DEFAULT_TIME_ZONE) {
        return Ok(TimeZone::UTC);
    }

    TimeZone::get(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_needs_no_database() -> Result<(), jiff::Error> {
        let zone = parse_time_zone(" utc ")?;

        assert_eq!(
            zone.to_offset(jiff::Timestamp::UNIX_EPOCH),
            jiff::tz::Offset::UTC
        );

        Ok(())
    }

    #[test]
    fn unknown_zone_is_an_error() {
        assert!(parse_time_zone("Mars/Olympus_Mons").is_err());
    }
}
