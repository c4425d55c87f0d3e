use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    meal_plan::{ports::LLMClient, value_objects::CompletionRequest},
};

const CHAT_COMPLETIONS_PATH: &str = "v1/chat/completions";
const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Clone)]
pub struct MistralLLMClient {
    api_key: Option<String>,
    model_name: String,
    endpoint: Url,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl MistralLLMClient {
    pub fn new(config: LLMConfig) -> Result<Self, CoreError> {
        let endpoint = chat_completions_url(&config.base_url)?;

        Ok(Self {
            api_key: config.api_key.filter(|key| !key.trim().is_empty()),
            model_name: config.model,
            endpoint,
            client: Client::new(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn call_mistral_api(
        &self,
        api_key: &str,
        request: ChatCompletionRequest,
    ) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Mistral API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Mistral API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Mistral response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

fn chat_completions_url(base_url: &str) -> Result<Url, CoreError> {
    let mut base = Url::parse(base_url)
        .map_err(|e| CoreError::Invalid(format!("invalid LLM base url {base_url}: {e}")))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(CHAT_COMPLETIONS_PATH)
        .map_err(|e| CoreError::Invalid(format!("invalid LLM base url {base_url}: {e}")))
}

impl LLMClient for MistralLLMClient {
    async fn complete_json(&self, request: CompletionRequest) -> Result<String, CoreError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(CoreError::ExternalServiceError(
                "no completion API key configured".to_string(),
            ));
        };

        let request = ChatCompletionRequest {
            model: self.model_name.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: request.user_prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: request.max_tokens,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        self.call_mistral_api(api_key, request).await
    }
}
