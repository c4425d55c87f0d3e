use crate::application::http::{
    catalog::router::CatalogApiDoc, meal_plan::router::MealPlanApiDoc,
    system::router::SystemApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI Meal Planner API",
        description = "Meal plans for mothers and young children built from a catalog of Zimbabwean foods"
    ),
    nest(
        (path = "/api", api = CatalogApiDoc),
        (path = "/api", api = MealPlanApiDoc),
    )
)]
pub struct ApiDoc;

/// Full document, including the unprefixed system routes.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(SystemApiDoc::openapi());
    doc
}
