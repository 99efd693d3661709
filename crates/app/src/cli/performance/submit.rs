use academy_app::domain::{
    courses::records::CourseUuid, performance::data::NewPerformanceScore,
    students::records::StudentUuid,
};
use clap::Args;
use jiff::Timestamp;
use uuid::Uuid;

use crate::cli::ConnectArgs;

#[derive(Debug, Args)]
pub(crate) struct SubmitArgs {
    #[command(flatten)]
    connect: ConnectArgs,

    #[arg(long)]
    course_uuid: Uuid,

    #[arg(long)]
    student_uuid: Uuid,

    /// Score between 0 and 100
    #[arg(long)]
    score: f64,

    /// When the score was given; defaults to now
    #[arg(long)]
    at: Option<Timestamp>,
}

pub(crate) async fn run(args: SubmitArgs) -> Result<(), String> {
    let ctx = args.connect.connect().await?;

    let record = ctx
        .performance
        .submit_performance_score(NewPerformanceScore {
            course_uuid: CourseUuid::from_uuid(args.course_uuid),
            student_uuid: StudentUuid::from_uuid(args.student_uuid),
            score: args.score,
            scored_at: args.at.unwrap_or_else(Timestamp::now),
        })
        .await
        .map_err(|error| format!("failed to submit score: {error}"))?;

    println!("course_uuid: {}", record.course_uuid);
    println!("student_uuid: {}", record.student_uuid);
    println!("score: {}", record.score);
    println!("scored_at: {}", record.scored_at);

    Ok(())
}
