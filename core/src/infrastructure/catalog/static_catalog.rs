use std::sync::Arc;

use crate::domain::{
    catalog::{data::zimbabwe_food_catalog, entities::FoodItem, ports::CatalogRepository},
    common::entities::app_errors::CoreError,
};

/// Catalog held in memory for the life of the process.
#[derive(Debug, Clone)]
pub struct StaticCatalogRepository {
    items: Arc<[FoodItem]>,
}

impl StaticCatalogRepository {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl Default for StaticCatalogRepository {
    fn default() -> Self {
        Self::new(zimbabwe_food_catalog())
    }
}

impl CatalogRepository for StaticCatalogRepository {
    async fn get_all(&self) -> Result<Vec<FoodItem>, CoreError> {
        Ok(self.items.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_same_items_on_every_call() {
        let repository = StaticCatalogRepository::default();

        let first = repository.get_all().await.unwrap();
        let second = repository.get_all().await.unwrap();

        assert_eq!(first, zimbabwe_food_catalog());
        assert_eq!(first, second);
    }
}
