use academy_app::domain::students::records::StudentUuid;
use clap::Args;
use jiff::Timestamp;
use uuid::Uuid;

use crate::cli::{ConnectArgs, display_or};

#[derive(Debug, Args)]
pub(crate) struct EvaluateArgs {
    #[command(flatten)]
    connect: ConnectArgs,

    /// Student to evaluate
    #[arg(long)]
    student_uuid: Uuid,

    /// Evaluation instant (RFC 3339); defaults to now
    #[arg(long)]
    at: Option<Timestamp>,
}

pub(crate) async fn run(args: EvaluateArgs) -> Result<(), String> {
    let ctx = args.connect.connect().await?;

    let status = ctx
        .suspension
        .evaluate_suspension(
            StudentUuid::from_uuid(args.student_uuid),
            args.at.unwrap_or_else(Timestamp::now),
        )
        .await
        .map_err(|error| format!("failed to evaluate suspension: {error}"))?;

    println!("is_suspended: {}", status.is_suspended);
    println!("reason: {}", status.reason.as_str());
    println!("valid_upto: {}", display_or(status.valid_upto, "none"));
    println!("suspension_date: {}", display_or(status.suspension_date, "none"));
    println!(
        "auto_suspend_after: {}",
        display_or(status.auto_suspend_after, "none")
    );

    Ok(())
}
