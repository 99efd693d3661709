//! Feedback Data

use std::collections::BTreeMap;

use crate::domain::{
    courses::records::ClassUuid,
    feedback::{errors::FeedbackServiceError, records::FeedbackUuid, subjects::Subject},
    students::records::StudentUuid,
};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// New Feedback Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    pub uuid: FeedbackUuid,
    pub student_uuid: StudentUuid,
    pub class_uuid: ClassUuid,
    pub subject: Subject,
    pub ratings: BTreeMap<String, u8>,
    pub comment: Option<String>,
}

impl NewFeedback {
    /// Check ratings against the subject's attribute set.
    ///
    /// # Errors
    ///
    /// Returns an error when there are no ratings, an attribute does not
    /// belong to the subject, or a rating is outside 1 through 5.
    pub fn validate(&self) -> Result<(), FeedbackServiceError> {
        if self.ratings.is_empty() {
            return Err(FeedbackServiceError::NoRatings);
        }

        for (attribute, rating) in &self.ratings {
            if !self.subject.has_attribute(attribute) {
                return Err(FeedbackServiceError::UnknownAttribute {
                    subject: self.subject,
                    attribute: attribute.clone(),
                });
            }

            if !(MIN_RATING..=MAX_RATING).contains(rating) {
                return Err(FeedbackServiceError::RatingOutOfRange {
                    attribute: attribute.clone(),
                    rating: *rating,
                });
            }
        }

        Ok(())
    }
}
