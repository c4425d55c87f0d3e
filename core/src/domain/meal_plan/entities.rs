use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::catalog::entities::Nutrients;

pub const DEFAULT_MEAL_EMOJI: &str = "🍽️";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlan {
    pub introduction: String,
    pub meals: Vec<Meal>,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub nutrients: Nutrients,
    pub benefits: String,
    #[serde(default = "default_meal_emoji")]
    pub image_emoji: String,
}

fn default_meal_emoji() -> String {
    DEFAULT_MEAL_EMOJI.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealRecommendation {
    pub name: String,
    pub description: String,
    pub nutritional_benefits: String,
    pub suitability_reason: String,
    #[serde(default)]
    pub emojis: Vec<String>,
}

/// Where a response body came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedMealPlan {
    pub plan: MealPlan,
    pub source: PlanSource,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRecommendations {
    pub recommendations: Vec<MealRecommendation>,
    pub source: PlanSource,
}
