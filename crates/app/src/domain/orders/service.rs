//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use storefront::orders::Order;

use crate::{api::ApiClient, domain::orders::errors::OrdersServiceError};

#[derive(Debug, Clone)]
pub struct HttpOrdersService {
    api: ApiClient,
}

impl HttpOrdersService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OrdersService for HttpOrdersService {
    async fn list_orders(&self, customer: &str) -> Result<Vec<Order>, OrdersServiceError> {
        let orders: Option<Vec<Order>> = self
            .api
            .get_optional(&format!("orders/customers/{customer}"))
            .await?;

        Ok(orders.unwrap_or_default())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieves the orders placed by `customer`, in whatever order the API returns them.
    async fn list_orders(&self, customer: &str) -> Result<Vec<Order>, OrdersServiceError>;
}
