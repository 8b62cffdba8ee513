//! Order submission service.

use async_trait::async_trait;
use mockall::automock;
use serde_json::Value;
use storefront::checkout::{OrderPayload, SubmissionOutcome};
use tracing::info;

use crate::{api::ApiClient, domain::checkout::errors::CheckoutServiceError};

/// Submits orders to the checkout endpoint of the order API.
#[derive(Debug, Clone)]
pub struct HttpCheckoutService {
    api: ApiClient,
}

impl HttpCheckoutService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CheckoutService for HttpCheckoutService {
    async fn submit(
        &self,
        payload: &OrderPayload,
    ) -> Result<SubmissionOutcome, CheckoutServiceError> {
        let body: Value = self.api.post("checkout", payload).await?;

        let outcome = SubmissionOutcome::from_body(body);

        if let SubmissionOutcome::Redirect(url) = &outcome {
            info!(%url, "checkout requested a redirect");
        }

        Ok(outcome)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Sends one order submission. Never retried.
    async fn submit(
        &self,
        payload: &OrderPayload,
    ) -> Result<SubmissionOutcome, CheckoutServiceError>;
}
