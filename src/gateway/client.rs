use std::time::Duration;

use reqwest::{Client, Response};
use uuid::Uuid;

use crate::catalog::Product;
use crate::config::ApiConfig;
use crate::gateway::error::GatewayError;
use crate::gateway::types::{Echo, ListEnvelope, MutationBody};
use crate::store::ProductStore;

/// Client for the remote catalog API.
///
/// Every operation returns a safe fallback instead of an error: an empty
/// list, `None`, or the conservative `true` for the uniqueness check.
/// Mutating operations toggle the store's busy flag for their duration;
/// the release is a scope guard, so it runs on the failure path too.
pub struct ProductGateway {
    client: Client,
    base_url: String,
    store: ProductStore,
}

impl ProductGateway {
    pub fn new(api: &ApiConfig, store: ProductStore) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(api.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(api.timeout_seconds)))
            .build()
            .expect("Failed to build catalog API client");

        Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    /// Fetch all products. Returns an empty list on any failure; the caller
    /// owns the busy flag around list fetches (see `ProductStore::refresh`).
    pub async fn list(&self) -> Vec<Product> {
        let request_id = Uuid::new_v4();
        match self.try_list().await {
            Ok(products) => {
                tracing::debug!(%request_id, count = products.len(), "Fetched product list");
                products
            }
            Err(err) => {
                tracing::warn!(%request_id, error = %err, "Product list fetch failed, degrading to empty list");
                Vec::new()
            }
        }
    }

    /// Create a product. Returns the server's echo on success, `None` on
    /// any failure.
    pub async fn create(&self, product: &Product) -> Option<Echo> {
        let request_id = Uuid::new_v4();
        let _busy = self.busy();
        match self.try_create(product).await {
            Ok(echo) => {
                tracing::info!(%request_id, product_id = %product.id, "Product created");
                Some(echo)
            }
            Err(err) => {
                tracing::warn!(%request_id, product_id = %product.id, error = %err, "Product create failed");
                None
            }
        }
    }

    /// Update an existing product, keyed by its immutable id.
    pub async fn update(&self, product: &Product) -> Option<Echo> {
        let request_id = Uuid::new_v4();
        let _busy = self.busy();
        match self.try_update(product).await {
            Ok(echo) => {
                tracing::info!(%request_id, product_id = %product.id, "Product updated");
                Some(echo)
            }
            Err(err) => {
                tracing::warn!(%request_id, product_id = %product.id, error = %err, "Product update failed");
                None
            }
        }
    }

    /// Delete a product. Returns `Some(())` on success, `None` on failure.
    pub async fn delete(&self, product: &Product) -> Option<()> {
        let request_id = Uuid::new_v4();
        let _busy = self.busy();
        match self.try_delete(product).await {
            Ok(()) => {
                tracing::info!(%request_id, product_id = %product.id, "Product deleted");
                Some(())
            }
            Err(err) => {
                tracing::warn!(%request_id, product_id = %product.id, error = %err, "Product delete failed");
                None
            }
        }
    }

    /// Ask the service whether an id is already taken.
    ///
    /// If the check itself fails, reports `true`: assuming a collision
    /// blocks submission instead of risking a duplicate id.
    pub async fn id_exists(&self, id: &str) -> bool {
        let request_id = Uuid::new_v4();
        match self.try_id_exists(id).await {
            Ok(exists) => {
                tracing::debug!(%request_id, product_id = %id, exists, "ID verification resolved");
                exists
            }
            Err(err) => {
                tracing::warn!(%request_id, product_id = %id, error = %err, "ID verification failed, assuming collision");
                true
            }
        }
    }

    /// Set the busy flag, returning a guard that clears it when dropped.
    fn busy(&self) -> impl Drop {
        self.store.set_loading(true);
        scopeguard::guard(self.store.clone(), |store| store.set_loading(false))
    }

    async fn try_list(&self) -> Result<Vec<Product>, GatewayError> {
        let url = format!("{}/bp/products", self.base_url);
        let resp = ok_status(self.client.get(&url).send().await?)?;
        let envelope: ListEnvelope = resp.json().await?;
        Ok(envelope.data)
    }

    async fn try_create(&self, product: &Product) -> Result<Echo, GatewayError> {
        let url = format!("{}/bp/products", self.base_url);
        let resp = ok_status(self.client.post(&url).json(product).send().await?)?;
        let body: MutationBody = resp.json().await?;
        Ok(body.into())
    }

    async fn try_update(&self, product: &Product) -> Result<Echo, GatewayError> {
        let url = format!("{}/bp/products/{}", self.base_url, product.id);
        let resp = ok_status(self.client.put(&url).json(product).send().await?)?;
        let body: MutationBody = resp.json().await?;
        Ok(body.into())
    }

    async fn try_delete(&self, product: &Product) -> Result<(), GatewayError> {
        let url = format!("{}/bp/products/{}", self.base_url, product.id);
        ok_status(self.client.delete(&url).send().await?)?;
        Ok(())
    }

    async fn try_id_exists(&self, id: &str) -> Result<bool, GatewayError> {
        let url = format!("{}/bp/products/verification/{}", self.base_url, id);
        let resp = ok_status(self.client.get(&url).send().await?)?;
        Ok(resp.json().await?)
    }
}

fn ok_status(resp: Response) -> Result<Response, GatewayError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(GatewayError::UnexpectedStatus {
            status: resp.status().as_u16(),
        })
    }
}
