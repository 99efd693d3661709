//! Performance Records

use jiff::Timestamp;

use crate::domain::{courses::records::CourseUuid, students::records::StudentUuid};

/// A student's score in a course. At most one per course and student.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceScoreRecord {
    pub course_uuid: CourseUuid,
    pub student_uuid: StudentUuid,
    pub score: f64,
    pub scored_at: Timestamp,
}
