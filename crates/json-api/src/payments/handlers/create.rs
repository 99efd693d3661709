//! Record Payment Handler

use jiff::Timestamp;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use academy_app::domain::payments::{data::NewPayment, records::PaymentRecord};

use crate::{extensions::*, payments::errors::into_status_error};

/// Record Payment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordPaymentRequest {
    pub transaction_id: String,
    pub student_uuid: Uuid,
    pub academy_uuid: Option<Uuid>,
    pub tutor_uuid: Option<Uuid>,
    pub course_uuid: Option<Uuid>,

    /// Minor currency units
    pub amount: u64,

    /// Minor currency units, taken from `amount`
    #[serde(default)]
    pub commission: u64,

    pub payment_method: String,

    /// RFC 3339 timestamp; defaults to now
    pub payment_date: Option<String>,

    /// End of the paid coverage window, RFC 3339
    pub valid_upto: Option<String>,

    #[serde(default)]
    pub is_manual_entry: bool,
}

impl TryFrom<RecordPaymentRequest> for NewPayment {
    type Error = StatusError;

    fn try_from(request: RecordPaymentRequest) -> Result<Self, Self::Error> {
        let payment_date = parse_optional_timestamp(request.payment_date.as_deref(), "paymentDate")?
            .unwrap_or_else(Timestamp::now);

        let valid_upto = parse_optional_timestamp(request.valid_upto.as_deref(), "validUpto")?;

        Ok(NewPayment {
            transaction_id: request.transaction_id,
            student_uuid: request.student_uuid.into(),
            academy_uuid: request.academy_uuid.map(Into::into),
            tutor_uuid: request.tutor_uuid.map(Into::into),
            course_uuid: request.course_uuid.map(Into::into),
            amount: request.amount,
            commission: request.commission,
            payment_method: request.payment_method,
            payment_date,
            valid_upto,
            is_manual_entry: request.is_manual_entry,
        })
    }
}

/// Payment Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentResponse {
    pub transaction_id: String,
    pub student_uuid: Uuid,
    pub academy_uuid: Option<Uuid>,
    pub tutor_uuid: Option<Uuid>,
    pub course_uuid: Option<Uuid>,
    pub amount: u64,
    pub commission: u64,
    pub status: String,
    pub payment_method: String,
    pub payment_date: String,
    pub valid_upto: Option<String>,
    pub is_manual_entry: bool,
    pub created_at: String,
}

impl From<PaymentRecord> for PaymentResponse {
    fn from(record: PaymentRecord) -> Self {
        PaymentResponse {
            transaction_id: record.transaction_id,
            student_uuid: record.student_uuid.into(),
            academy_uuid: record.academy_uuid.map(Into::into),
            tutor_uuid: record.tutor_uuid.map(Into::into),
            course_uuid: record.course_uuid.map(Into::into),
            amount: record.amount,
            commission: record.commission,
            status: record.status.to_string(),
            payment_method: record.payment_method,
            payment_date: record.payment_date.to_string(),
            valid_upto: record.valid_upto.map(|valid_upto| valid_upto.to_string()),
            is_manual_entry: record.is_manual_entry,
            created_at: record.created_at.to_string(),
        }
    }
}

/// Record Payment Handler
#[endpoint(
    tags("payments"),
    summary = "Record Payment",
    responses(
        (status_code = StatusCode::CREATED, description = "Payment recorded"),
        (status_code = StatusCode::CONFLICT, description = "Transaction already recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RecordPaymentRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PaymentResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let payment = NewPayment::try_from(json.into_inner())?;

    let record = state
        .app
        .payments
        .record_payment(payment)
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/payments/{}", record.transaction_id),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(record.into()))
}
