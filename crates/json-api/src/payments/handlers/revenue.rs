//! Academy Revenue Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{PathParam, QueryParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use academy_app::domain::payments::data::RevenueWindow;

use crate::{extensions::*, payments::errors::into_status_error};

/// Academy Revenue Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RevenueResponse {
    pub academy_uuid: Uuid,
    pub from: String,
    pub to: String,
    pub payment_count: u64,
    pub gross_amount: u64,
    pub total_commission: u64,
    pub net_amount: u64,
}

/// Academy Revenue Handler
///
/// Sums `Paid` payments dated within `[from, to)`.
#[endpoint(tags("academies"), summary = "Academy Revenue")]
pub(crate) async fn handler(
    academy: PathParam<Uuid>,
    from: QueryParam<String, true>,
    to: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<RevenueResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let academy = academy.into_inner();

    let window = RevenueWindow::new(
        parse_timestamp(&from.into_inner(), "from")?,
        parse_timestamp(&to.into_inner(), "to")?,
    )
    .map_err(into_status_error)?;

    let summary = state
        .app
        .payments
        .academy_revenue(academy.into(), window)
        .await
        .map_err(into_status_error)?;

    Ok(Json(RevenueResponse {
        academy_uuid: academy,
        from: window.from.to_string(),
        to: window.to.to_string(),
        payment_count: summary.payment_count,
        gross_amount: summary.gross_amount,
        total_commission: summary.total_commission,
        net_amount: summary.net_amount,
    }))
}
