//! Students

pub mod records;
mod repository;

pub(crate) use repository::PgStudentsRepository;
