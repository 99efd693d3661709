//! Student Records

use jiff::Timestamp;

use crate::{
    domain::{academies::records::AcademyUuid, tutors::records::TutorUuid},
    uuids::TypedUuid,
};

/// Category assigned to enrolled learners, as opposed to staff or guests.
pub const STUDENT_CATEGORY: &str = "Student";

/// Student UUID
pub type StudentUuid = TypedUuid<StudentRecord>;

/// Student Record
#[derive(Debug, Clone)]
pub struct StudentRecord {
    pub uuid: StudentUuid,
    pub name: String,
    pub category: String,

    /// Academy the student is enrolled with; independent students have none.
    pub academy_uuid: Option<AcademyUuid>,

    /// Tutor responsible for the student.
    pub instructor_uuid: Option<TutorUuid>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
