//! Payments Handlers

pub(crate) mod create;
pub(crate) mod revenue;
