use axum::extract::State;
use mealplanner_core::domain::meal_plan::{
    entities::MealPlan, ports::MealPlanService, value_objects::MealPlanRequest,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
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
#[serde(rename_all = "camelCase")]
pub struct MealPlanResponse {
    pub meal_plan: MealPlan,
}

#[utoipa::path(
    post,
    path = "/meal-plan",
    tag = "meal-plan",
    summary = "Generate meal plan",
    description = "Generates a meal plan from the catalog items suited to the target user. A fixed fallback plan is returned when the completion API fails.",
    responses(
        (status = 200, body = MealPlanResponse),
        (status = 422, description = "Invalid request body")
    ),
    request_body = MealPlanRequestValidator
)]
pub async fn generate_meal_plan(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<MealPlanRequestValidator>,
) -> Result<Response<MealPlanResponse>, ApiError> {
    let generated = state
        .service
        .generate_meal_plan(MealPlanRequest::from(payload))
        .await
        .map_err(|e| {
            error!("Meal plan generation failed: {}", e);
            ApiError::InternalServerError(format!("Error generating meal plan: {}", e))
        })?;

    info!(source = ?generated.source, "meal plan served");

    Ok(Response::OK(MealPlanResponse {
        meal_plan: generated.plan,
    }))
}
