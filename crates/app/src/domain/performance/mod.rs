//! Performance
//!
//! Per-course scores for each student and the tutor-level summary built
//! from them.

pub mod data;
pub mod errors;
pub mod overall;
pub mod records;
mod repository;
pub mod service;

pub use errors::PerformanceServiceError;
pub use service::*;
