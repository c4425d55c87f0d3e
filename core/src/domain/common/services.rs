use std::sync::Arc;

use crate::domain::{catalog::ports::CatalogRepository, meal_plan::ports::LLMClient};

/// Holds every port the domain services need. Each service trait is
/// implemented on this struct in its own module.
pub struct Service<C, LLM>
where
    C: CatalogRepository,
    LLM: LLMClient,
{
    pub(crate) catalog_repository: Arc<C>,
    pub(crate) llm_client: Arc<LLM>,
}

impl<C, LLM> Service<C, LLM>
where
    C: CatalogRepository,
    LLM: LLMClient,
{
    pub fn new(catalog_repository: C, llm_client: LLM) -> Self {
        Self {
            catalog_repository: Arc::new(catalog_repository),
            llm_client: Arc::new(llm_client),
        }
    }
}

impl<C, LLM> Clone for Service<C, LLM>
where
    C: CatalogRepository,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            catalog_repository: Arc::clone(&self.catalog_repository),
            llm_client: Arc::clone(&self.llm_client),
        }
    }
}
