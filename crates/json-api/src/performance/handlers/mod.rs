//! Performance Handlers

pub(crate) mod overall;
pub(crate) mod submit;
