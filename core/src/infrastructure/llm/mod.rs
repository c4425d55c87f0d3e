pub mod mistral_client;

pub use mistral_client::MistralLLMClient;
