//! Per-class assignment completion.

use std::collections::BTreeMap;

use crate::domain::{assignments::records::ClassSubmission, courses::records::ClassUuid};

/// Completion for one class, counted per class rather than per assignment:
/// each field is 0 or 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentStats {
    /// 1 when the student submitted anything in the class.
    pub total_student_assignments: u32,

    /// 1 when at least one of those submissions is approved.
    pub completed_assignments: u32,
}

pub type AssignmentStatsByClass = BTreeMap<ClassUuid, AssignmentStats>;

/// Reduce a student's submissions to per-class completion.
///
/// Every requested class gets an entry, zeroed when nothing was submitted.
/// Submissions for classes outside `classes` are ignored.
#[must_use]
pub fn assignment_stats(
    classes: &[ClassUuid],
    submissions: &[ClassSubmission],
) -> AssignmentStatsByClass {
    let mut stats: AssignmentStatsByClass = classes
        .iter()
        .map(|class| (*class, AssignmentStats::default()))
        .collect();

    for submission in submissions {
        let Some(entry) = stats.get_mut(&submission.class_uuid) else {
            continue;
        };

        entry.total_student_assignments = 1;

        if submission.is_approved() {
            entry.completed_assignments = 1;
        }
    }

    stats
}
