//! Tutor-level performance summary.

use crate::domain::courses::records::CourseRecord;

/// Overall performance across a tutor's courses.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OverallPerformance {
    /// Mean of every score in every course, to one decimal.
    pub overall_score: f64,

    /// Mean of positive course quality ratings, to one decimal.
    pub average_course_quality: f64,

    pub total_students: u64,
    pub total_courses: u64,
}

/// Summarise `scores` (flattened across all of the tutor's courses) and
/// the quality ratings of `courses`.
#[must_use]
pub fn overall_performance(
    courses: &[CourseRecord],
    scores: &[f64],
    total_students: u64,
) -> OverallPerformance {
    let qualities: Vec<f64> = courses
        .iter()
        .filter_map(|course| course.course_quality)
        .filter(|quality| *quality > 0.0)
        .collect();

    OverallPerformance {
        overall_score: rounded_mean(scores),
        average_course_quality: rounded_mean(&qualities),
        total_students,
        total_courses: courses.len() as u64,
    }
}

fn rounded_mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;

    (mean * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::domain::{courses::records::CourseUuid, tutors::records::TutorUuid};

    use super::*;

    fn course(quality: Option<f64>) -> CourseRecord {
        CourseRecord {
            uuid: CourseUuid::new(),
            tutor_uuid: TutorUuid::new(),
            name: "Course".to_string(),
            course_quality: quality,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn scores_are_flattened_before_averaging() {
        // Course A scores 90 and 70, course B scores 50: (90 + 70 + 50) / 3.
        let summary = overall_performance(&[course(None), course(None)], &[90.0, 70.0, 50.0], 3);

        assert!((summary.overall_score - 70.0).abs() < f64::EPSILON);
        assert_eq!(summary.total_courses, 2);
        assert_eq!(summary.total_students, 3);
    }

    #[test]
    fn results_round_to_one_decimal() {
        let summary = overall_performance(&[], &[80.0, 85.0, 91.0], 0);

        assert!((summary.overall_score - 85.3).abs() < 1e-9);
    }

    #[test]
    fn quality_ignores_missing_and_non_positive_values() {
        let courses = [
            course(Some(4.0)),
            course(Some(5.0)),
            course(Some(0.0)),
            course(Some(-1.0)),
            course(None),
        ];

        let summary = overall_performance(&courses, &[], 0);

        assert!((summary.average_course_quality - 4.5).abs() < f64::EPSILON);
        assert_eq!(summary.total_courses, 5);
    }

    #[test]
    fn nothing_to_average_yields_zeros() {
        assert_eq!(overall_performance(&[], &[], 0), OverallPerformance::default());
    }
}
