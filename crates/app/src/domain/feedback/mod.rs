//! Feedback
//!
//! Tutors leave one feedback entry per student per class, rated on the
//! attributes of the class's subject.

pub mod data;
pub mod errors;
pub mod pending;
pub mod records;
mod repository;
pub mod service;
pub mod subjects;

pub use errors::FeedbackServiceError;
pub use service::*;
