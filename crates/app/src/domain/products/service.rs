//! Products service.

use async_trait::async_trait;
use mockall::automock;
use storefront::products::{Collection, Product, ProductId};

use crate::{api::ApiClient, domain::products::errors::ProductsServiceError};

#[derive(Debug, Clone)]
pub struct HttpProductsService {
    api: ApiClient,
}

impl HttpProductsService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProductsService for HttpProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self.api.get("products").await?)
    }

    async fn list_collections(&self) -> Result<Vec<Collection>, ProductsServiceError> {
        Ok(self.api.get("collections").await?)
    }

    async fn get_product(
        &self,
        product: &ProductId,
    ) -> Result<Option<Product>, ProductsServiceError> {
        Ok(self
            .api
            .get_optional(&format!("products/{product}"))
            .await?)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves every product in the catalogue.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieves every collection.
    async fn list_collections(&self) -> Result<Vec<Collection>, ProductsServiceError>;

    /// Retrieve a single product; `None` when it does not exist (any more).
    async fn get_product(
        &self,
        product: &ProductId,
    ) -> Result<Option<Product>, ProductsServiceError>;
}
