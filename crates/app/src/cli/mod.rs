use academy_app::{context::AppContext, time_zone::parse_time_zone};
use clap::{Args, Parser, Subcommand};

mod assignments;
mod credits;
mod db;
mod feedback;
mod payments;
mod performance;
mod suspension;

#[derive(Debug, Parser)]
#[command(name = "academy-app", about = "Academy account status CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Suspension(suspension::SuspensionCommand),
    Credits(credits::CreditsCommand),
    Assignments(assignments::AssignmentsCommand),
    Feedback(feedback::FeedbackCommand),
    Performance(performance::PerformanceCommand),
    Payments(payments::PaymentsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Suspension(command) => suspension::run(command).await,
            Commands::Credits(command) => credits::run(command).await,
            Commands::Assignments(command) => assignments::run(command).await,
            Commands::Feedback(command) => feedback::run(command).await,
            Commands::Performance(command) => performance::run(command).await,
            Commands::Payments(command) => payments::run(command).await,
        }
    }
}

/// Connection settings shared by every command that talks to the engine.
#[derive(Debug, Args)]
pub(crate) struct ConnectArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// IANA time zone that calendar days are counted in
    #[arg(long, env = "ACADEMY_TIME_ZONE", default_value = "UTC")]
    time_zone: String,
}

impl ConnectArgs {
    pub(crate) async fn connect(&self) -> Result<AppContext, String> {
        let time_zone = parse_time_zone(&self.time_zone)
            .map_err(|error| format!("invalid time zone {}: {error}", self.time_zone))?;

        AppContext::from_database_url(&self.database_url, time_zone)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))
    }
}

pub(crate) fn display_or<T: std::fmt::Display>(value: Option<T>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), |value| value.to_string())
}
