use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{
        entities::{GeneratedMealPlan, GeneratedRecommendations},
        value_objects::{CompletionRequest, MealPlanRequest},
    },
};

/// LLM Client trait for calling chat completion models
pub trait LLMClient: Send + Sync {
    /// Returns the raw content of the first choice, expected to be JSON text.
    fn complete_json(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for meal plan generation
pub trait MealPlanService: Send + Sync {
    /// Completion failures never surface here; they turn into the fallback plan.
    fn generate_meal_plan(
        &self,
        request: MealPlanRequest,
    ) -> impl Future<Output = Result<GeneratedMealPlan, CoreError>> + Send;

    fn recommend_meals(
        &self,
        request: MealPlanRequest,
    ) -> impl Future<Output = Result<GeneratedRecommendations, CoreError>> + Send;
}
