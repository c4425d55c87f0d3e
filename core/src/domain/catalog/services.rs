use tracing::{error, info};

use crate::domain::{
    catalog::{
        entities::FoodItem,
        ports::{CatalogRepository, CatalogService, CatalogStore},
    },
    common::{entities::app_errors::CoreError, services::Service},
    meal_plan::ports::LLMClient,
};

impl<C, LLM> CatalogService for Service<C, LLM>
where
    C: CatalogRepository,
    LLM: LLMClient,
{
    async fn get_food_items(&self) -> Result<Vec<FoodItem>, CoreError> {
        self.catalog_repository.get_all().await
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedReport {
    pub inserted: Vec<String>,
    pub failed: Vec<(String, CoreError)>,
}

impl SeedReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Replaces the contents of the remote store with the catalog.
///
/// A failure to clear the store aborts the run. Insert failures are collected
/// per item so that one bad row does not hide the others.
pub async fn seed_catalog<C, S>(catalog: &C, store: &S) -> Result<SeedReport, CoreError>
where
    C: CatalogRepository,
    S: CatalogStore,
{
    let items = catalog.get_all().await?;
    if items.is_empty() {
        return Err(CoreError::Invalid("catalog is empty".to_string()));
    }

    info!("Clearing existing catalog rows");
    store.clear().await?;

    info!("Inserting {} food items", items.len());
    let mut report = SeedReport::default();
    for item in items {
        let name = item.name.clone();
        match store.insert(item).await {
            Ok(()) => {
                info!(item = %name, "inserted food item");
                report.inserted.push(name);
            }
            Err(e) => {
                error!(item = %name, "failed to insert food item: {}", e);
                report.failed.push((name, e));
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::catalog::data::zimbabwe_food_catalog;

    struct FixedCatalog(Vec<FoodItem>);

    impl CatalogRepository for FixedCatalog {
        async fn get_all(&self) -> Result<Vec<FoodItem>, CoreError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        clear_fails: bool,
        reject: Option<String>,
        calls: Mutex<Vec<String>>,
    }

    impl CatalogStore for RecordingStore {
        async fn clear(&self) -> Result<(), CoreError> {
            self.calls.lock().unwrap().push("clear".to_string());
            if self.clear_fails {
                return Err(CoreError::ExternalServiceError("clear failed".to_string()));
            }
            Ok(())
        }

        async fn insert(&self, item: FoodItem) -> Result<(), CoreError> {
            self.calls.lock().unwrap().push(item.name.clone());
            if self.reject.as_deref() == Some(item.name.as_str()) {
                return Err(CoreError::ExternalServiceError("duplicate".to_string()));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn clears_then_inserts_every_item_in_order() {
        let catalog = FixedCatalog(zimbabwe_food_catalog());
        let store = RecordingStore::default();

        let report = seed_catalog(&catalog, &store).await.unwrap();

        assert!(report.is_success());
        assert_eq!(report.inserted.len(), catalog.0.len());
        let calls = store.calls.lock().unwrap();
        assert_eq!(calls[0], "clear");
        assert_eq!(calls[1], catalog.0[0].name);
        assert_eq!(calls.len(), catalog.0.len() + 1);
    }

    #[tokio::test]
    async fn keeps_going_after_a_failed_insert() {
        let catalog = FixedCatalog(zimbabwe_food_catalog());
        let rejected = catalog.0[2].name.clone();
        let store = RecordingStore {
            reject: Some(rejected.clone()),
            ..Default::default()
        };

        let report = seed_catalog(&catalog, &store).await.unwrap();

        assert!(!report.is_success());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, rejected);
        assert_eq!(report.inserted.len(), catalog.0.len() - 1);
    }

    #[tokio::test]
    async fn aborts_when_the_store_cannot_be_cleared() {
        let catalog = FixedCatalog(zimbabwe_food_catalog());
        let store = RecordingStore {
            clear_fails: true,
            ..Default::default()
        };

        let result = seed_catalog(&catalog, &store).await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
        assert_eq!(store.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn refuses_to_seed_an_empty_catalog() {
        let store = RecordingStore::default();
        let result = seed_catalog(&FixedCatalog(vec![]), &store).await;
        assert!(matches!(result, Err(CoreError::Invalid(_))));
        assert!(store.calls.lock().unwrap().is_empty());
    }
}
