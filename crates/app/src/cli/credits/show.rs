use academy_app::domain::students::records::StudentUuid;
use clap::Args;
use uuid::Uuid;

use crate::cli::ConnectArgs;

#[derive(Debug, Args)]
pub(crate) struct ShowArgs {
    #[command(flatten)]
    connect: ConnectArgs,

    /// Student whose ledger is printed
    #[arg(long)]
    student_uuid: Uuid,
}

pub(crate) async fn run(args: ShowArgs) -> Result<(), String> {
    let ctx = args.connect.connect().await?;

    let ledger = ctx
        .credits
        .get_credits(StudentUuid::from_uuid(args.student_uuid))
        .await
        .map_err(|error| format!("failed to load credits: {error}"))?;

    println!("student_uuid: {}", ledger.student_uuid);
    println!("balance: {}", ledger.balance);
    println!("consistent: {}", ledger.is_consistent());

    for entry in &ledger.entries {
        println!("{:+} {}", entry.credits, entry.message);
    }

    Ok(())
}
