pub mod entities;
pub mod services;

pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.mistral.ai";
pub const DEFAULT_COMPLETION_MODEL: &str = "mistral-large-latest";

#[derive(Clone, Debug)]
pub struct MealPlannerConfig {
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// `None` disables outbound completion calls; every request is served from
    /// the fallback path.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_COMPLETION_BASE_URL.to_string(),
            model: DEFAULT_COMPLETION_MODEL.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CatalogStoreConfig {
    pub base_url: String,
    pub api_key: String,
    pub table: String,
}
