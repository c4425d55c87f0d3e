use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    system::validators::TestMessageValidator,
};

pub const GREETING: &str = "Hello! I am the AI Meal Planner. I can help you plan nutritious meals for mothers and babies in Zimbabwe.";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestApiResponse {
    pub response: String,
    pub received_message: String,
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    post,
    path = "/api/test",
    tag = "system",
    summary = "Echo test",
    description = "Answers with a fixed greeting and echoes the received message back.",
    responses(
        (status = 200, body = TestApiResponse)
    ),
    request_body = TestMessageValidator
)]
pub async fn test_api(
    ValidateJson(payload): ValidateJson<TestMessageValidator>,
) -> Result<Response<TestApiResponse>, ApiError> {
    Ok(Response::OK(TestApiResponse {
        response: GREETING.to_string(),
        received_message: payload.message,
        status: "ok".to_string(),
        timestamp: Utc::now(),
    }))
}
