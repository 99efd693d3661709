use clap::{Args, Subcommand};

mod check;
mod migrate;

/// Schema and connectivity maintenance.
#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending migrations
    Migrate(migrate::MigrateArgs),

    /// Confirm the database answers queries
    Check(check::CheckArgs),
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    match command.command {
        DbSubcommand::Migrate(args) => migrate::run(args).await,
        DbSubcommand::Check(args) => check::run(args).await,
    }
}
