mod common;

use axum::http::StatusCode;
use common::ApiContext;
use serde_json::{Value, json};
use test_context::test_context;

#[test_context(ApiContext)]
#[tokio::test]
async fn root_reports_service_status(ctx: &mut ApiContext) {
    let response = ctx.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "AI Meal Planner API is running");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_endpoint_echoes_message(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/api/test")
        .json(&json!({ "message": "ping" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["receivedMessage"], "ping");
    assert_eq!(body["status"], "ok");
    assert!(
        body["response"]
            .as_str()
            .unwrap()
            .starts_with("Hello! I am the AI Meal Planner.")
    );
    assert!(body["timestamp"].is_string());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_endpoint_requires_message(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/api/test")
        .json(&json!({ "text": "ping" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn serves_openapi_document(ctx: &mut ApiContext) {
    let response = ctx.server.get("/api-docs/openapi.json").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    for path in ["/", "/api/test", "/api/food-items", "/api/meal-plan"] {
        assert!(body["paths"][path].is_object(), "missing {path}");
    }
}

#[tokio::test]
async fn mounts_routes_under_root_path() {
    let server = common::test_server(&["--server-root-path", "/planner"]).await;

    server
        .get("/planner/api/food-items")
        .await
        .assert_status_ok();
    assert_eq!(
        server.get("/api/food-items").await.status_code(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn status_answers_on_bare_root_path() {
    let server = common::test_server(&["--server-root-path", "/planner"]).await;

    for path in ["/planner", "/planner/"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK, "{path}");
        let body: Value = response.json();
        assert_eq!(body["message"], "AI Meal Planner API is running");
    }
}

#[tokio::test]
async fn metrics_are_off_by_default() {
    let server = common::test_server(&[]).await;

    assert_eq!(
        server.get("/metrics").await.status_code(),
        StatusCode::NOT_FOUND
    );
}
