use academy_app::domain::{credits::data::CreditAdjustment, students::records::StudentUuid};
use clap::Args;
use uuid::Uuid;

use crate::cli::ConnectArgs;

#[derive(Debug, Args)]
pub(crate) struct ApplyArgs {
    #[command(flatten)]
    connect: ConnectArgs,

    /// Student whose balance changes
    #[arg(long)]
    student_uuid: Uuid,

    /// Signed credit delta
    #[arg(long, allow_negative_numbers = true)]
    credits: i64,

    /// Reason recorded in the ledger
    #[arg(long)]
    message: String,
}

pub(crate) async fn run(args: ApplyArgs) -> Result<(), String> {
    let adjustment = CreditAdjustment::new(args.credits, args.message)
        .map_err(|error| format!("invalid adjustment: {error}"))?;

    let ctx = args.connect.connect().await?;

    let balance = ctx
        .credits
        .apply_credit_adjustment(StudentUuid::from_uuid(args.student_uuid), adjustment)
        .await
        .map_err(|error| format!("failed to apply credits: {error}"))?;

    println!("student_uuid: {}", balance.student_uuid);
    println!("balance: {}", balance.balance);

    Ok(())
}
