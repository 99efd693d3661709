//! Record Feedback Handler

use std::collections::BTreeMap;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use academy_app::domain::feedback::{
    data::NewFeedback, records::FeedbackRecord, subjects::Subject,
};

use crate::{extensions::*, feedback::errors::into_status_error};

/// One rated attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct Rating {
    pub attribute: String,

    /// 1 through 5
    pub rating: u8,
}

/// Record Feedback Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecordFeedbackRequest {
    /// Generated when omitted
    pub uuid: Option<Uuid>,
    pub student_uuid: Uuid,
    pub class_uuid: Uuid,

    /// music, dance, drawing, drums, vocal or violin
    pub subject: String,

    pub ratings: Vec<Rating>,
    pub comment: Option<String>,
}

impl TryFrom<RecordFeedbackRequest> for NewFeedback {
    type Error = StatusError;

    fn try_from(request: RecordFeedbackRequest) -> Result<Self, Self::Error> {
        let subject = request
            .subject
            .parse::<Subject>()
            .or_400("unknown feedback subject")?;

        let mut ratings = BTreeMap::new();

        for Rating { attribute, rating } in request.ratings {
            if ratings.insert(attribute, rating).is_some() {
                return Err(StatusError::bad_request().brief("attribute rated more than once"));
            }
        }

        Ok(NewFeedback {
            uuid: request.uuid.map_or_else(Default::default, Into::into),
            student_uuid: request.student_uuid.into(),
            class_uuid: request.class_uuid.into(),
            subject,
            ratings,
            comment: request
                .comment
                .map(|comment| comment.trim().to_string())
                .filter(|comment| !comment.is_empty()),
        })
    }
}

/// Feedback Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FeedbackResponse {
    pub uuid: Uuid,
    pub student_uuid: Uuid,
    pub class_uuid: Uuid,
    pub subject: String,
    pub ratings: Vec<Rating>,
    pub comment: Option<String>,
    pub created_at: String,
}

impl From<FeedbackRecord> for FeedbackResponse {
    fn from(record: FeedbackRecord) -> Self {
        FeedbackResponse {
            uuid: record.uuid.into(),
            student_uuid: record.student_uuid.into(),
            class_uuid: record.class_uuid.into(),
            subject: record.subject.to_string(),
            ratings: record
                .ratings
                .into_iter()
                .map(|(attribute, rating)| Rating { attribute, rating })
                .collect(),
            comment: record.comment,
            created_at: record.created_at.to_string(),
        }
    }
}

/// Record Feedback Handler
#[endpoint(
    tags("feedback"),
    summary = "Record Feedback",
    responses(
        (status_code = StatusCode::CREATED, description = "Feedback recorded"),
        (status_code = StatusCode::CONFLICT, description = "Feedback already recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RecordFeedbackRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<FeedbackResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let feedback = NewFeedback::try_from(json.into_inner())?;

    let record = state
        .app
        .feedback
        .record_feedback(feedback)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/feedback/{}", record.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(record.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use academy_app::domain::{
        courses::records::ClassUuid,
        feedback::{FeedbackServiceError, records::FeedbackUuid},
        students::records::StudentUuid,
    };

    use crate::test_helpers::TestMocks;

    use super::*;

    fn make_service(mocks: TestMocks) -> Service {
        mocks.into_service(Router::with_path("feedback").post(handler))
    }

    fn record_from(new: &NewFeedback) -> FeedbackRecord {
        FeedbackRecord {
            uuid: new.uuid,
            student_uuid: new.student_uuid,
            class_uuid: new.class_uuid,
            subject: new.subject,
            ratings: new.ratings.clone(),
            comment: new.comment.clone(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn test_record_feedback_returns_201() -> TestResult {
        let uuid = FeedbackUuid::new();
        let student = StudentUuid::new();
        let class = ClassUuid::new();

        let mut mocks = TestMocks::default();

        mocks
            .feedback
            .expect_record_feedback()
            .once()
            .withf(move |new| {
                new.uuid == uuid
                    && new.student_uuid == student
                    && new.class_uuid == class
                    && new.subject == Subject::Drums
                    && new.ratings.get("timing") == Some(&4)
            })
            .returning(|new| Ok(record_from(&new)));

        let mut res = TestClient::post("http://example.com/feedback")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "studentUuid": student.into_uuid(),
                "classUuid": class.into_uuid(),
                "subject": "drums",
                "ratings": [{ "attribute": "timing", "rating": 4 }],
                "comment": "solid groove",
            }))
            .send(&make_service(mocks))
            .await;

        let body: FeedbackResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/feedback/{uuid}").as_str()));
        assert_eq!(body.subject, "drums");
        assert_eq!(body.comment.as_deref(), Some("solid groove"));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_subject_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/feedback")
            .json(&json!({
                "studentUuid": StudentUuid::new().into_uuid(),
                "classUuid": ClassUuid::new().into_uuid(),
                "subject": "juggling",
                "ratings": [{ "attribute": "timing", "rating": 4 }],
            }))
            .send(&make_service(TestMocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_attribute_outside_subject_returns_400() -> TestResult {
        let mut mocks = TestMocks::default();

        mocks
            .feedback
            .expect_record_feedback()
            .once()
            .returning(|new| Err(new.validate().err().unwrap_or(FeedbackServiceError::InvalidData)));

        let res = TestClient::post("http://example.com/feedback")
            .json(&json!({
                "studentUuid": StudentUuid::new().into_uuid(),
                "classUuid": ClassUuid::new().into_uuid(),
                "subject": "drawing",
                "ratings": [{ "attribute": "timing", "rating": 4 }],
            }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_feedback_returns_409() -> TestResult {
        let mut mocks = TestMocks::default();

        mocks
            .feedback
            .expect_record_feedback()
            .once()
            .return_once(|_| Err(FeedbackServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/feedback")
            .json(&json!({
                "studentUuid": StudentUuid::new().into_uuid(),
                "classUuid": ClassUuid::new().into_uuid(),
                "subject": "vocal",
                "ratings": [{ "attribute": "tone", "rating": 5 }],
            }))
            .send(&make_service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
