use super::handlers::{
    get_root::{__path_get_root, get_root},
    test_api::{__path_test_api, test_api},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_root, test_api))]
pub struct SystemApiDoc;

pub fn system_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    let router = Router::new()
        .route(&format!("{}/", root_path), get(get_root))
        .route(&format!("{}/api/test", root_path), post(test_api));

    // `/planner` answers like `/planner/`.
    if root_path.is_empty() {
        router
    } else {
        router.route(root_path, get(get_root))
    }
}
