//! Academy account status engine: suspension, credits and tutor dashboards
//! over a shared PostgreSQL database.

pub mod context;
pub mod database;
pub mod domain;
pub mod time_zone;

#[cfg(test)]
mod test;

mod uuids;
