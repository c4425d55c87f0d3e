use crate::{
    domain::common::{MealPlannerConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{catalog::StaticCatalogRepository, llm::MistralLLMClient},
};

pub type MealPlannerService = Service<StaticCatalogRepository, MistralLLMClient>;

/// Wires the production adapters into the domain service.
pub async fn create_service(config: MealPlannerConfig) -> Result<MealPlannerService, CoreError> {
    if config.llm.api_key.is_none() {
        tracing::warn!("No completion API key configured; every meal plan will be the fallback plan");
    }

    let catalog_repository = StaticCatalogRepository::default();
    let llm_client = MistralLLMClient::new(config.llm)?;
    tracing::info!(endpoint = %llm_client.endpoint(), "completion client ready");

    Ok(Service::new(catalog_repository, llm_client))
}
