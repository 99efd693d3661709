use clap::{Args, Subcommand};

mod apply;
mod show;

#[derive(Debug, Args)]
pub(crate) struct CreditsCommand {
    #[command(subcommand)]
    command: CreditsSubcommand,
}

#[derive(Debug, Subcommand)]
enum CreditsSubcommand {
    Apply(apply::ApplyArgs),
    Show(show::ShowArgs),
}

pub(crate) async fn run(command: CreditsCommand) -> Result<(), String> {
    match command.command {
        CreditsSubcommand::Apply(args) => apply::run(args).await,
        CreditsSubcommand::Show(args) => show::run(args).await,
    }
}
