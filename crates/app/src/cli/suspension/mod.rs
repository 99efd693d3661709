use clap::{Args, Subcommand};

mod evaluate;

#[derive(Debug, Args)]
pub(crate) struct SuspensionCommand {
    #[command(subcommand)]
    command: SuspensionSubcommand,
}

#[derive(Debug, Subcommand)]
enum SuspensionSubcommand {
    Evaluate(evaluate::EvaluateArgs),
}

pub(crate) async fn run(command: SuspensionCommand) -> Result<(), String> {
    match command.command {
        SuspensionSubcommand::Evaluate(args) => evaluate::run(args).await,
    }
}
