//! Assignments

pub mod errors;
pub mod records;
mod repository;
pub mod service;
pub mod stats;

pub use errors::AssignmentsServiceError;
pub use service::*;
