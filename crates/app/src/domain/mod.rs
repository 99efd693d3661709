//! Academy Domain Concerns

pub mod academies;
pub mod assignments;
pub mod courses;
pub mod credits;
pub mod feedback;
pub mod payments;
pub mod performance;
pub mod students;
pub mod suspension;
pub mod tutors;
