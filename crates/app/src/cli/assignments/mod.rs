use clap::{Args, Subcommand};

mod stats;

#[derive(Debug, Args)]
pub(crate) struct AssignmentsCommand {
    #[command(subcommand)]
    command: AssignmentsSubcommand,
}

#[derive(Debug, Subcommand)]
enum AssignmentsSubcommand {
    Stats(stats::StatsArgs),
}

pub(crate) async fn run(command: AssignmentsCommand) -> Result<(), String> {
    match command.command {
        AssignmentsSubcommand::Stats(args) => stats::run(args).await,
    }
}
