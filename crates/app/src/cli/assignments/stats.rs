use academy_app::domain::{courses::records::ClassUuid, students::records::StudentUuid};
use clap::Args;
use uuid::Uuid;

use crate::cli::ConnectArgs;

#[derive(Debug, Args)]
pub(crate) struct StatsArgs {
    #[command(flatten)]
    connect: ConnectArgs,

    /// Student whose submissions are counted
    #[arg(long)]
    student_uuid: Uuid,

    /// Comma-separated class UUIDs
    #[arg(long, value_delimiter = ',', required = true)]
    classes: Vec<Uuid>,
}

pub(crate) async fn run(args: StatsArgs) -> Result<(), String> {
    let ctx = args.connect.connect().await?;

    let classes = args.classes.into_iter().map(ClassUuid::from_uuid).collect();

    let stats = ctx
        .assignments
        .compute_assignment_stats(StudentUuid::from_uuid(args.student_uuid), classes)
        .await
        .map_err(|error| format!("failed to compute assignment stats: {error}"))?;

    for (class, stats) in stats {
        println!(
            "{class}: total={} completed={}",
            stats.total_student_assignments, stats.completed_assignments
        );
    }

    Ok(())
}
