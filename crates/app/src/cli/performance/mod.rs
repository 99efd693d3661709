use clap::{Args, Subcommand};

mod overall;
mod submit;

#[derive(Debug, Args)]
pub(crate) struct PerformanceCommand {
    #[command(subcommand)]
    command: PerformanceSubcommand,
}

#[derive(Debug, Subcommand)]
enum PerformanceSubcommand {
    Overall(overall::OverallArgs),
    Submit(submit::SubmitArgs),
}

pub(crate) async fn run(command: PerformanceCommand) -> Result<(), String> {
    match command.command {
        PerformanceSubcommand::Overall(args) => overall::run(args).await,
        PerformanceSubcommand::Submit(args) => submit::run(args).await,
    }
}
