//! Academy Records

use jiff::Timestamp;

use crate::{domain::academies::policies::PolicySettings, uuids::TypedUuid};

/// Academy UUID
pub type AcademyUuid = TypedUuid<AcademyRecord>;

/// Academy Record
#[derive(Debug, Clone)]
pub struct AcademyRecord {
    pub uuid: AcademyUuid,
    pub name: String,
    pub policies: PolicySettings,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
