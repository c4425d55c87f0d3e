use reqwest::{Client, RequestBuilder, Response};
use url::Url;

use crate::domain::{
    catalog::{entities::FoodItem, ports::CatalogStore},
    common::{CatalogStoreConfig, entities::app_errors::CoreError},
};

/// Catalog table behind a Supabase (PostgREST) REST endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseCatalogStore {
    api_key: String,
    table_url: Url,
    client: Client,
}

impl SupabaseCatalogStore {
    pub fn new(config: CatalogStoreConfig) -> Result<Self, CoreError> {
        let invalid =
            |e: url::ParseError| CoreError::Invalid(format!("invalid store url: {}", e));

        let mut base = Url::parse(&config.base_url).map_err(invalid)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let table_url = base
            .join(&format!("rest/v1/{}", config.table))
            .map_err(invalid)?;

        Ok(Self {
            api_key: config.api_key,
            table_url,
            client: Client::new(),
        })
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn check(response: Result<Response, reqwest::Error>) -> Result<(), CoreError> {
        let response = response.map_err(|e| {
            tracing::error!("Catalog store request failed: {}", e);
            CoreError::ExternalServiceError(format!("store request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CoreError::ExternalServiceError(format!(
                "store returned error: {} - {}",
                status, error_text
            )));
        }

        Ok(())
    }
}

impl CatalogStore for SupabaseCatalogStore {
    async fn clear(&self) -> Result<(), CoreError> {
        // PostgREST refuses unfiltered deletes; every row has a name.
        let response = self
            .authorized(self.client.delete(self.table_url.clone()))
            .query(&[("name", "not.is.null")])
            .send()
            .await;

        Self::check(response).await
    }

    async fn insert(&self, item: FoodItem) -> Result<(), CoreError> {
        let response = self
            .authorized(self.client.post(self.table_url.clone()))
            .header("Prefer", "return=minimal")
            .json(&item)
            .send()
            .await;

        Self::check(response).await
    }
}
