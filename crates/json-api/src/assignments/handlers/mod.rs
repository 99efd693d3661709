//! Assignments Handlers

pub(crate) mod stats;
