//! Database Config

use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// IANA time zone that suspension days are counted in
    #[arg(long, env = "ACADEMY_TIME_ZONE", default_value = "UTC")]
    pub time_zone: String,
}
