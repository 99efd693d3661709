use academy_app::domain::tutors::records::TutorUuid;
use clap::Args;
use jiff::Timestamp;
use uuid::Uuid;

use crate::cli::ConnectArgs;

#[derive(Debug, Args)]
pub(crate) struct PendingArgs {
    #[command(flatten)]
    connect: ConnectArgs,

    /// Tutor whose outstanding feedback is counted
    #[arg(long)]
    tutor_uuid: Uuid,

    /// Only classes ending before this instant count; defaults to now
    #[arg(long)]
    at: Option<Timestamp>,
}

pub(crate) async fn run(args: PendingArgs) -> Result<(), String> {
    let ctx = args.connect.connect().await?;

    let pending = ctx
        .feedback
        .compute_pending_feedback(
            TutorUuid::from_uuid(args.tutor_uuid),
            args.at.unwrap_or_else(Timestamp::now),
        )
        .await
        .map_err(|error| format!("failed to compute pending feedback: {error}"))?;

    println!("students: {}", pending.student_count);
    println!("past_classes: {}", pending.past_class_count);
    println!("feedback_needed: {}", pending.feedback_needed);
    println!("feedback_given: {}", pending.feedback_given);
    println!("pending_feedback: {}", pending.pending_feedback);

    Ok(())
}
