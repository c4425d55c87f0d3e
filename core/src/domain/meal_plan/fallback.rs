use crate::domain::{
    catalog::entities::{FoodItem, Nutrients},
    meal_plan::entities::{Meal, MealPlan, MealRecommendation},
};

pub const FALLBACK_MEAL_NAME: &str = "Simple Nutritious Breakfast";

const MAX_FALLBACK_RECOMMENDATIONS: usize = 5;

/// The plan served whenever the completion API cannot produce one.
pub fn fallback_meal_plan() -> MealPlan {
    MealPlan {
        introduction: "This is a simple nutritious meal plan based on your preferences."
            .to_string(),
        meals: vec![Meal {
            name: FALLBACK_MEAL_NAME.to_string(),
            ingredients: vec![
                "Oatmeal".to_string(),
                "Milk".to_string(),
                "Honey".to_string(),
                "Banana".to_string(),
            ],
            instructions: vec![
                "Mix oatmeal with milk".to_string(),
                "Heat for 2 minutes".to_string(),
                "Add honey and sliced banana".to_string(),
            ],
            nutrients: Nutrients::new(300.0, 10.0, 45.0, 5.0),
            benefits: "Provides energy and essential nutrients to start the day.".to_string(),
            image_emoji: "🥣".to_string(),
        }],
        tips: vec!["Prepare ingredients the night before for quicker cooking.".to_string()],
    }
}

/// Builds recommendations straight from the eligible catalog items.
pub fn fallback_recommendations(food_items: &[FoodItem]) -> Vec<MealRecommendation> {
    food_items
        .iter()
        .take(MAX_FALLBACK_RECOMMENDATIONS)
        .map(|item| {
            let n = item.nutrients;
            MealRecommendation {
                name: item.name.clone(),
                description: item.description.clone(),
                nutritional_benefits: format!(
                    "{} kcal, {}g protein, {}g carbs and {}g fat per serving.",
                    n.calories, n.protein, n.carbs, n.fat
                ),
                suitability_reason: format!(
                    "Suitable for {} at {}.",
                    item.suitable_for.join(", "),
                    item.meal_type.join(", ")
                ),
                emojis: item.emoji.chars().map(String::from).collect(),
            }
        })
        .collect()
}
