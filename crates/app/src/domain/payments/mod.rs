//! Payments

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod revenue;
pub mod selection;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use errors::PaymentsServiceError;
pub(crate) use repository::PgPaymentsRepository;
pub use service::*;
