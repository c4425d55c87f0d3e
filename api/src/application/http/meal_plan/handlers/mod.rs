pub mod generate_meal_plan;
pub mod get_meal_recommendations;
