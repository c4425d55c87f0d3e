use super::handlers::get_food_items::{__path_get_food_items, get_food_items};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_food_items))]
pub struct CatalogApiDoc;

pub fn catalog_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/food-items", state.args.server.root_path),
        get(get_food_items),
    )
}
