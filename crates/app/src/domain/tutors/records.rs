//! Tutor Records

use jiff::Timestamp;

use crate::{domain::academies::records::AcademyUuid, uuids::TypedUuid};

/// Tutor UUID
pub type TutorUuid = TypedUuid<TutorRecord>;

/// Tutor Record
#[derive(Debug, Clone)]
pub struct TutorRecord {
    pub uuid: TutorUuid,
    pub name: String,
    pub academy_uuid: Option<AcademyUuid>,
    pub created_at: Timestamp,
}
