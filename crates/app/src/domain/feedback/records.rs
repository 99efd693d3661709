//! Feedback Records

use std::collections::BTreeMap;

use jiff::Timestamp;

use crate::{
    domain::{
        courses::records::ClassUuid, feedback::subjects::Subject, students::records::StudentUuid,
    },
    uuids::TypedUuid,
};

/// Feedback UUID
pub type FeedbackUuid = TypedUuid<FeedbackRecord>;

/// Feedback Record
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRecord {
    pub uuid: FeedbackUuid,
    pub student_uuid: StudentUuid,
    pub class_uuid: ClassUuid,
    pub subject: Subject,

    /// Attribute name to rating, 1 through 5.
    pub ratings: BTreeMap<String, u8>,

    pub comment: Option<String>,
    pub created_at: Timestamp,
}
