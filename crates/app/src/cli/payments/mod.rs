use clap::{Args, Subcommand};

mod revenue;

#[derive(Debug, Args)]
pub(crate) struct PaymentsCommand {
    #[command(subcommand)]
    command: PaymentsSubcommand,
}

#[derive(Debug, Subcommand)]
enum PaymentsSubcommand {
    Revenue(revenue::RevenueArgs),
}

pub(crate) async fn run(command: PaymentsCommand) -> Result<(), String> {
    match command.command {
        PaymentsSubcommand::Revenue(args) => revenue::run(args).await,
    }
}
