//! Course Records

use jiff::Timestamp;

use crate::{domain::tutors::records::TutorUuid, uuids::TypedUuid};

/// Course UUID
pub type CourseUuid = TypedUuid<CourseRecord>;

/// Course Record
#[derive(Debug, Clone)]
pub struct CourseRecord {
    pub uuid: CourseUuid,
    pub tutor_uuid: TutorUuid,
    pub name: String,

    /// Quality rating; absent until the course has been rated.
    pub course_quality: Option<f64>,

    pub created_at: Timestamp,
}

/// Class Record
///
/// A single scheduled session of a course.
#[derive(Debug, Clone)]
pub struct ClassRecord;

/// Class UUID
pub type ClassUuid = TypedUuid<ClassRecord>;
