//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    api::{ApiClient, ApiError},
    config::{ApiConfig, SessionConfig},
    domain::{
        checkout::{CheckoutService, HttpCheckoutService},
        orders::{HttpOrdersService, OrdersService},
        products::{HttpProductsService, ProductsService},
        users::{HttpUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build HTTP client")]
    HttpClient(#[source] ApiError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub orders: Arc<dyn OrdersService>,
    pub users: Arc<dyn UsersService>,
    pub checkout: Arc<dyn CheckoutService>,
}

impl AppContext {
    /// Build application context from API and session settings.
    ///
    /// # Errors
    ///
    /// Returns an error when an HTTP client cannot be built.
    pub fn from_config(api: &ApiConfig, session: &SessionConfig) -> Result<Self, AppInitError> {
        let backend =
            ApiClient::new(&api.api_url, api.timeout()).map_err(AppInitError::HttpClient)?;

        let store =
            ApiClient::new(&api.store_url, api.timeout()).map_err(AppInitError::HttpClient)?;

        let store = match &session.session_token {
            Some(token) if !token.trim().is_empty() => store.with_bearer_token(token),
            _ => store,
        };

        Ok(Self {
            products: Arc::new(HttpProductsService::new(backend.clone())),
            orders: Arc::new(HttpOrdersService::new(backend.clone())),
            users: Arc::new(HttpUsersService::new(store)),
            checkout: Arc::new(HttpCheckoutService::new(backend)),
        })
    }
}
