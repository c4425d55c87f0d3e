use std::future::Future;

use crate::domain::{catalog::entities::FoodItem, common::entities::app_errors::CoreError};

/// Read access to the food catalog
pub trait CatalogRepository: Send + Sync {
    fn get_all(&self) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;
}

/// Remote table the catalog is seeded into
pub trait CatalogStore: Send + Sync {
    /// Removes every row from the table.
    fn clear(&self) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn insert(&self, item: FoodItem) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait CatalogService: Send + Sync {
    fn get_food_items(&self) -> impl Future<Output = Result<Vec<FoodItem>, CoreError>> + Send;
}
