use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Malformed completion: {0}")]
    MalformedCompletion(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::SerializationError(e.to_string())
    }
}
