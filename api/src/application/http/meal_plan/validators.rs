use mealplanner_core::domain::meal_plan::value_objects::{
    MealPlanRequest, NutritionGoals, TargetUser,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequestValidator {
    #[schema(example = "child")]
    pub target_user: TargetUser,

    /// Age in months, used when `targetUser` is `child`.
    #[schema(example = 7)]
    pub child_age: Option<u32>,

    #[validate(length(
        min = 1,
        max = 64,
        message = "mealType must be between 1 and 64 characters"
    ))]
    #[schema(example = "breakfast")]
    pub meal_type: String,

    #[validate(length(max = 20, message = "at most 20 dietary restrictions are accepted"))]
    pub dietary_restrictions: Option<Vec<String>>,

    pub nutrition_goals: Option<NutritionGoals>,

    pub prefer_traditional: Option<bool>,
}

impl From<MealPlanRequestValidator> for MealPlanRequest {
    fn from(payload: MealPlanRequestValidator) -> Self {
        let mut request =
            MealPlanRequest::new(payload.target_user, payload.child_age, payload.meal_type);
        request.dietary_restrictions = payload.dietary_restrictions.unwrap_or_default();
        if let Some(goals) = payload.nutrition_goals {
            request.nutrition_goals = goals;
        }
        if let Some(prefer_traditional) = payload.prefer_traditional {
            request.prefer_traditional = prefer_traditional;
        }
        request
    }
}
