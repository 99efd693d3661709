use std::time::Instant;

use academy_app::database;
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct CheckArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CheckArgs) -> Result<(), String> {
    let started = Instant::now();

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    database::ping(&pool)
        .await
        .map_err(|error| format!("database did not answer: {error}"))?;

    println!("database reachable in {}ms", started.elapsed().as_millis());

    Ok(())
}
