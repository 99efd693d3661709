use academy_app::domain::{academies::records::AcademyUuid, payments::data::RevenueWindow};
use clap::Args;
use jiff::Timestamp;
use uuid::Uuid;

use crate::cli::ConnectArgs;

#[derive(Debug, Args)]
pub(crate) struct RevenueArgs {
    #[command(flatten)]
    connect: ConnectArgs,

    #[arg(long)]
    academy_uuid: Uuid,

    /// Window start, inclusive
    #[arg(long)]
    from: Timestamp,

    /// Window end, exclusive
    #[arg(long)]
    to: Timestamp,
}

pub(crate) async fn run(args: RevenueArgs) -> Result<(), String> {
    let window =
        RevenueWindow::new(args.from, args.to).map_err(|error| format!("invalid window: {error}"))?;

    let ctx = args.connect.connect().await?;

    let summary = ctx
        .payments
        .academy_revenue(AcademyUuid::from_uuid(args.academy_uuid), window)
        .await
        .map_err(|error| format!("failed to summarise revenue: {error}"))?;

    println!("payment_count: {}", summary.payment_count);
    println!("gross_amount: {}", summary.gross_amount);
    println!("total_commission: {}", summary.total_commission);
    println!("net_amount: {}", summary.net_amount);

    Ok(())
}
