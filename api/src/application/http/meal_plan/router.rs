use super::handlers::{
    generate_meal_plan::{__path_generate_meal_plan, generate_meal_plan},
    get_meal_recommendations::{__path_get_meal_recommendations, get_meal_recommendations},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_meal_plan, get_meal_recommendations))]
pub struct MealPlanApiDoc;

pub fn meal_plan_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/meal-plan", state.args.server.root_path),
            post(generate_meal_plan),
        )
        .route(
            &format!("{}/api/meal-recommendations", state.args.server.root_path),
            post(get_meal_recommendations),
        )
}
