use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Macronutrients per serving. Calories in kcal, the rest in grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Nutrients {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Nutrients {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub name: String,
    pub description: String,
    pub nutrients: Nutrients,
    /// Role and age band tags, e.g. `mother` or `child_9_plus`.
    pub suitable_for: Vec<String>,
    /// `breakfast`, `lunch`, `dinner` or `snack`.
    pub meal_type: Vec<String>,
    pub traditional: bool,
    pub emoji: String,
}

impl FoodItem {
    pub fn new(
        name: &str,
        description: &str,
        nutrients: Nutrients,
        suitable_for: &[&str],
        meal_type: &[&str],
        traditional: bool,
        emoji: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            nutrients,
            suitable_for: suitable_for.iter().map(|s| s.to_string()).collect(),
            meal_type: meal_type.iter().map(|s| s.to_string()).collect(),
            traditional,
            emoji: emoji.to_string(),
        }
    }

    pub fn is_suitable_for(&self, tag: &str) -> bool {
        self.suitable_for.iter().any(|t| t == tag)
    }
}
