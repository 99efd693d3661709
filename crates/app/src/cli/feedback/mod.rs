use clap::{Args, Subcommand};

mod pending;

#[derive(Debug, Args)]
pub(crate) struct FeedbackCommand {
    #[command(subcommand)]
    command: FeedbackSubcommand,
}

#[derive(Debug, Subcommand)]
enum FeedbackSubcommand {
    Pending(pending::PendingArgs),
}

pub(crate) async fn run(command: FeedbackCommand) -> Result<(), String> {
    match command.command {
        FeedbackSubcommand::Pending(args) => pending::run(args).await,
    }
}
