//! Credits
//!
//! Signed credit adjustments against a student. The cached balance and the
//! append-only ledger are written together by a single statement.

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::CreditsServiceError;
pub use service::*;
