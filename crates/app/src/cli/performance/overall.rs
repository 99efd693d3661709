use academy_app::domain::tutors::records::TutorUuid;
use clap::Args;
use uuid::Uuid;

use crate::cli::ConnectArgs;

#[derive(Debug, Args)]
pub(crate) struct OverallArgs {
    #[command(flatten)]
    connect: ConnectArgs,

    /// Tutor to summarise
    #[arg(long)]
    tutor_uuid: Uuid,
}

pub(crate) async fn run(args: OverallArgs) -> Result<(), String> {
    let ctx = args.connect.connect().await?;

    let summary = ctx
        .performance
        .compute_overall_performance(TutorUuid::from_uuid(args.tutor_uuid))
        .await
        .map_err(|error| format!("failed to compute performance: {error}"))?;

    println!("overall_score: {:.1}", summary.overall_score);
    println!("average_course_quality: {:.1}", summary.average_course_quality);
    println!("total_students: {}", summary.total_students);
    println!("total_courses: {}", summary.total_courses);

    Ok(())
}
