//! Courses and their scheduled classes

pub mod records;
mod repository;

pub(crate) use repository::PgCoursesRepository;
