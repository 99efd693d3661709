//! Assignment Records

use crate::domain::courses::records::ClassUuid;

/// Status a reviewer gives a submission once it is accepted.
pub const APPROVED_STATUS: &str = "APPROVED";

/// One of a student's submissions, reduced to the class it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSubmission {
    pub class_uuid: ClassUuid,

    /// Free-text review status.
    pub status: String,
}

impl ClassSubmission {
    /// Approval is matched case-insensitively; every other status is open.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case(APPROVED_STATUS)
    }
}
