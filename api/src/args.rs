use clap::Parser;
use mealplanner_core::domain::common::{
    DEFAULT_COMPLETION_BASE_URL, DEFAULT_COMPLETION_MODEL, LLMConfig, MealPlannerConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealplanner-api", version, about = "AI meal planning API")]
pub struct Args {
    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub server: ServerArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    #[arg(
        long = "llm-api-key",
        env = "MISTRAL_API_KEY",
        name = "MISTRAL_API_KEY",
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    #[arg(
        long = "llm-base-url",
        env = "MISTRAL_API_URL",
        name = "MISTRAL_API_URL",
        default_value = DEFAULT_COMPLETION_BASE_URL
    )]
    pub base_url: String,

    #[arg(
        long = "llm-model",
        env = "MISTRAL_MODEL",
        name = "MISTRAL_MODEL",
        default_value = DEFAULT_COMPLETION_MODEL
    )]
    pub model: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(
        long = "log-filter",
        env = "LOG_FILTER",
        name = "LOG_FILTER",
        default_value = "info"
    )]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", name = "LOG_JSON")]
    pub json: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    /// IP address to bind.
    #[arg(
        long = "server-host",
        env = "HOST",
        name = "HOST",
        default_value = "0.0.0.0"
    )]
    pub host: String,

    #[arg(
        long = "server-port",
        env = "PORT",
        name = "PORT",
        default_value_t = 8000
    )]
    pub port: u16,

    /// Prefix every route is mounted under, e.g. `/planner`.
    #[arg(
        long = "server-root-path",
        env = "SERVER_ROOT_PATH",
        name = "SERVER_ROOT_PATH",
        default_value = ""
    )]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        name = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    /// Expose Prometheus metrics on `/metrics`.
    #[arg(long = "server-metrics", env = "SERVER_METRICS", name = "SERVER_METRICS")]
    pub metrics: bool,
}

impl From<Args> for MealPlannerConfig {
    fn from(args: Args) -> Self {
        MealPlannerConfig {
            llm: LLMConfig {
                api_key: args.llm.api_key,
                base_url: args.llm.base_url,
                model: args.llm.model,
            },
        }
    }
}
