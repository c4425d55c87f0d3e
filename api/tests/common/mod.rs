#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use mealplanner_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub async fn test_server(extra_args: &[&str]) -> TestServer {
    let args = Args::try_parse_from(
        std::iter::once("mealplanner-api").chain(extra_args.iter().copied()),
    )
    .unwrap();
    let state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

/// API server wired to a mocked completion endpoint.
pub struct ApiContext {
    pub completion_api: MockServer,
    pub server: TestServer,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let completion_api = MockServer::start().await;
        let server = test_server(&[
            "--llm-base-url",
            &completion_api.uri(),
            "--llm-api-key",
            "test-key",
        ])
        .await;

        Self {
            completion_api,
            server,
        }
    }
}

impl ApiContext {
    /// Makes the completion endpoint answer with `content` as the first choice.
    pub async fn complete_with(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
            .mount(&self.completion_api)
            .await;
    }

    pub async fn fail_with(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.completion_api)
            .await;
    }
}

pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "cmpl-test",
        "object": "chat.completion",
        "model": "mistral-large-latest",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

pub fn meal_plan_content() -> String {
    json!({
        "introduction": "A gentle breakfast for a 7 month old.",
        "meals": [{
            "name": "Mashed Sweet Potato",
            "ingredients": ["sweet potato", "breast milk"],
            "instructions": ["Boil the sweet potato", "Mash with milk until smooth"],
            "nutrients": { "calories": 86, "protein": 1.6, "carbs": 20.1, "fat": 0.1 },
            "benefits": "Vitamin A and gentle energy.",
            "imageEmoji": "🍠"
        }],
        "tips": ["Introduce one new food at a time."]
    })
    .to_string()
}
