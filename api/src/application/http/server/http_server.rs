use std::sync::Arc;

use crate::application::http::catalog::router::catalog_routes;
use crate::application::http::meal_plan::router::meal_plan_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::api_doc;
use crate::application::http::system::router::system_routes;
use crate::args::Args;

use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use mealplanner_core::{application::create_service, domain::common::MealPlannerConfig};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info_span, warn};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use uuid::Uuid;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = MealPlannerConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    if allowed_origins.iter().any(|origin| origin == "*") {
        debug!("Allowing any origin");
        return cors.allow_origin(Any);
    }

    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid allowed origin {:?}", origin);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", origins);

    cors.allow_origin(origins).allow_credentials(true)
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!(
                "http_request",
                method = ?request.method(),
                uri,
                request_id = %Uuid::new_v4()
            )
        },
    );

    let cors = cors_layer(&state.args.server.allowed_origins);

    let mut openapi = api_doc();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let mut router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(Redoc::with_url(
            format!("{}/redoc", root_path),
            openapi.clone(),
        ))
        .merge(
            RapiDoc::with_openapi(api_docs_url, openapi).path(format!("{}/rapidoc", root_path)),
        )
        .merge(system_routes(state.clone()))
        .merge(catalog_routes(state.clone()))
        .merge(meal_plan_routes(state.clone()));

    // Installs a process-global recorder.
    if state.args.server.metrics {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    let router = router.layer(trace_layer).layer(cors).with_state(state);
    Ok(router)
}
