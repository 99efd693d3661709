//! Pending feedback count.

/// Feedback outstanding for a tutor's students over their past classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingFeedback {
    pub student_count: u64,
    pub past_class_count: u64,

    /// One entry per student per past class.
    pub feedback_needed: u64,

    /// Entries already recorded, across every subject.
    pub feedback_given: u64,

    /// `feedback_needed - feedback_given`. Negative when a student has
    /// feedback under more than one subject for the same class; this is
    /// reported as-is rather than clamped.
    pub pending_feedback: i64,
}

impl PendingFeedback {
    #[must_use]
    pub fn new(student_count: u64, past_class_count: u64, feedback_given: u64) -> Self {
        let feedback_needed = student_count.saturating_mul(past_class_count);

        let pending = i128::from(feedback_needed) - i128::from(feedback_given);

        let pending_feedback = i64::try_from(pending)
            .unwrap_or(if pending < 0 { i64::MIN } else { i64::MAX });

        Self {
            student_count,
            past_class_count,
            feedback_needed,
            feedback_given,
            pending_feedback,
        }
    }
}
