//! Suspension Handlers

pub(crate) mod evaluate;
