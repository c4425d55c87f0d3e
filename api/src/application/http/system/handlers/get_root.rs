use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

pub const SERVICE_MESSAGE: &str = "AI Meal Planner API is running";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    summary = "Service status",
    description = "Reports that the service is up along with its version and the current time.",
    responses(
        (status = 200, body = RootResponse)
    )
)]
pub async fn get_root() -> Result<Response<RootResponse>, ApiError> {
    Ok(Response::OK(RootResponse {
        message: SERVICE_MESSAGE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    }))
}
