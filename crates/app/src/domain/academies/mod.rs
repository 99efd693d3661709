//! Academies

pub mod policies;
pub mod records;
mod repository;

pub(crate) use repository::PgAcademiesRepository;
