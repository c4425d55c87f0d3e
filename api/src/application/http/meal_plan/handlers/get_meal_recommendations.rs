use axum::extract::State;
use mealplanner_core::domain::meal_plan::{
    entities::MealRecommendation, ports::MealPlanService, value_objects::MealPlanRequest,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::application::http::{
    meal_plan::validators::MealPlanRequestValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MealRecommendationsResponse {
    pub recommendations: Vec<MealRecommendation>,
}

#[utoipa::path(
    post,
    path = "/meal-recommendations",
    tag = "meal-plan",
    summary = "Recommend meals",
    description = "Suggests individual meals for the target user. Falls back to suitable catalog items when the completion API fails.",
    responses(
        (status = 200, body = MealRecommendationsResponse),
        (status = 422, description = "Invalid request body")
    ),
    request_body = MealPlanRequestValidator
)]
pub async fn get_meal_recommendations(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<MealPlanRequestValidator>,
) -> Result<Response<MealRecommendationsResponse>, ApiError> {
    let generated = state
        .service
        .recommend_meals(MealPlanRequest::from(payload))
        .await
        .map_err(|e| {
            error!("Meal recommendations failed: {}", e);
            ApiError::InternalServerError(format!("Error generating recommendations: {}", e))
        })?;

    Ok(Response::OK(MealRecommendationsResponse {
        recommendations: generated.recommendations,
    }))
}
