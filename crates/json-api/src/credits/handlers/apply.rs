//! Apply Credit Adjustment Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use academy_app::domain::credits::data::CreditAdjustment;

use crate::{credits::errors::into_status_error, extensions::*};

/// Credit Adjustment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreditAdjustmentRequest {
    /// Signed credit delta
    pub credits: i64,

    /// Reason recorded in the ledger
    pub message: String,
}

/// Credit Balance Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreditBalanceResponse {
    pub student_uuid: Uuid,

    /// Balance after the adjustment
    pub new_balance: i64,
}

/// Apply Credit Adjustment Handler
#[endpoint(
    tags("students"),
    summary = "Apply Credit Adjustment",
    responses(
        (status_code = StatusCode::OK, description = "Adjustment applied"),
        (status_code = StatusCode::NOT_FOUND, description = "Student not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    student: PathParam<Uuid>,
    json: JsonBody<CreditAdjustmentRequest>,
    depot: &mut Depot,
) -> Result<Json<CreditBalanceResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();

    let adjustment =
        CreditAdjustment::new(request.credits, request.message).map_err(into_status_error)?;

    let balance = state
        .app
        .credits
        .apply_credit_adjustment(student.into_inner().into(), adjustment)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CreditBalanceResponse {
        student_uuid: balance.student_uuid.into(),
        new_balance: balance.balance,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use academy_app::domain::{
        credits::{CreditsServiceError, records::CreditBalance},
        students::records::StudentUuid,
    };

    use crate::test_helpers::TestMocks;

    use super::*;

    fn make_service(mocks: TestMocks) -> Service {
        mocks.into_service(Router::with_path("students/{student}/credits").post(handler))
    }

    #[tokio::test]
    async fn test_apply_returns_new_balance() -> TestResult {
        let student = StudentUuid::new();

        let mut mocks = TestMocks::default();

        mocks
            .credits
            .expect_apply_credit_adjustment()
            .once()
            .withf(move |s, adjustment| {
                *s == student
                    && *adjustment
                        == CreditAdjustment {
                            credits: -3,
                            message: "late cancel".to_string(),
                        }
            })
            .return_once(move |_, _| {
                Ok(CreditBalance {
                    student_uuid: student,
                    balance: 7,
                })
            });

        let mut res = TestClient::post(format!("http://example.com/students/{student}/credits"))
            .json(&json!({ "credits": -3, "message": "  late cancel " }))
            .send(&make_service(mocks))
            .await;

        let body: CreditBalanceResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.student_uuid, student.into_uuid());
        assert_eq!(body.new_balance, 7);

        Ok(())
    }

    #[tokio::test]
    async fn test_apply_zero_is_rejected_without_calling_service() -> TestResult {
        let student = StudentUuid::new();

        let res = TestClient::post(format!("http://example.com/students/{student}/credits"))
            .json(&json!({ "credits": 0, "message": "noop" }))
            .send(&make_service(TestMocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_apply_blank_message_returns_400() -> TestResult {
        let student = StudentUuid::new();

        let res = TestClient::post(format!("http://example.com/students/{student}/credits"))
            .json(&json!({ "credits": 5, "message": "   " }))
            .send(&make_service(TestMocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_apply_unknown_student_returns_404() -> TestResult {
        let student = StudentUuid::new();

        let mut mocks = TestMocks::default();

        mocks
            .credits
            .expect_apply_credit_adjustment()
            .once()
            .return_once(|_, _| Err(CreditsServiceError::NotFound));

        let res = TestClient::post(format!("http://example.com/students/{student}/credits"))
            .json(&json!({ "credits": 5, "message": "refill" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_apply_overflow_returns_422() -> TestResult {
        let student = StudentUuid::new();

        let mut mocks = TestMocks::default();

        mocks
            .credits
            .expect_apply_credit_adjustment()
            .once()
            .return_once(|_, _| Err(CreditsServiceError::BalanceOutOfRange));

        let res = TestClient::post(format!("http://example.com/students/{student}/credits"))
            .json(&json!({ "credits": i64::MAX, "message": "jackpot" }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }
}
