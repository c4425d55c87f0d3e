use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct TestMessageValidator {
    #[validate(length(max = 5000, message = "message must be at most 5000 characters"))]
    pub message: String,
}
