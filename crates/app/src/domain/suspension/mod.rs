//! Suspension
//!
//! Decides whether a student's access is revoked because their paid
//! coverage, plus the academy's grace period, has run out.

pub mod errors;
pub mod evaluator;
pub mod service;

pub use errors::SuspensionServiceError;
pub use service::*;
