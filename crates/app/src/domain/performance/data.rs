//! Performance Data

use jiff::Timestamp;

use crate::domain::{
    courses::records::CourseUuid, performance::errors::PerformanceServiceError,
    students::records::StudentUuid,
};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Score submission; replaces any earlier score for the same course and student.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerformanceScore {
    pub course_uuid: CourseUuid,
    pub student_uuid: StudentUuid,
    pub score: f64,
    pub scored_at: Timestamp,
}

impl NewPerformanceScore {
    /// # Errors
    ///
    /// Returns [`PerformanceServiceError::InvalidScore`] when the score is not
    /// a finite number between 0 and 100.
    pub fn validate(&self) -> Result<(), PerformanceServiceError> {
        if !self.score.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&self.score) {
            return Err(PerformanceServiceError::InvalidScore(self.score));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(score: f64) -> NewPerformanceScore {
        NewPerformanceScore {
            course_uuid: CourseUuid::new(),
            student_uuid: StudentUuid::new(),
            score,
            scored_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn accepts_bounds() {
        assert!(score(0.0).validate().is_ok());
        assert!(score(100.0).validate().is_ok());
        assert!(score(72.5).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_and_non_finite() {
        for value in [-0.1, 100.1, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    score(value).validate(),
                    Err(PerformanceServiceError::InvalidScore(_))
                ),
                "{value} should be rejected"
            );
        }
    }
}
