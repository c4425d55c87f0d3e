use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mealplanner_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    UnProcessableEntity(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, &str) {
        match self {
            ApiError::InternalServerError(m) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR", m)
            }
            ApiError::UnProcessableEntity(m) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E_UNPROCESSABLE_ENTITY", m)
            }
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST", m),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, "E_NOT_FOUND", m),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let body = ApiErrorResponse {
            code: code.to_string(),
            status: status.as_u16(),
            message: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("resource not found".to_string()),
            CoreError::Invalid(m) => ApiError::UnProcessableEntity(m),
            other => ApiError::InternalServerError(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::UnProcessableEntity(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::UnProcessableEntity(e.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::UnProcessableEntity(errors.to_string())
    }
}

/// JSON body extractor that also runs `validator` rules on the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_core_errors_to_statuses() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (
                CoreError::Invalid("bad".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                CoreError::ExternalServiceError("down".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).into_response().status(), status);
        }
    }
}
