use axum::extract::State;
use mealplanner_core::domain::catalog::{entities::FoodItem, ports::CatalogService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemsResponse {
    pub food_items: Vec<FoodItem>,
}

#[utoipa::path(
    get,
    path = "/food-items",
    tag = "catalog",
    summary = "List food items",
    description = "Returns the full food catalog in its fixed order.",
    responses(
        (status = 200, body = FoodItemsResponse)
    )
)]
pub async fn get_food_items(
    State(state): State<AppState>,
) -> Result<Response<FoodItemsResponse>, ApiError> {
    let food_items = state
        .service
        .get_food_items()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FoodItemsResponse { food_items }))
}
