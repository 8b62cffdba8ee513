//! Users service.

use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;
use storefront::{products::ProductId, wishlist::UserRecord};

use crate::{api::ApiClient, domain::users::errors::UsersServiceError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToggleWishlist<'a> {
    product_id: &'a ProductId,
}

/// Users service backed by the storefront's session-authenticated user API.
#[derive(Debug, Clone)]
pub struct HttpUsersService {
    api: ApiClient,
}

impl HttpUsersService {
    /// `api` must carry the customer's session token.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn ensure_session(&self) -> Result<(), UsersServiceError> {
        if self.api.has_bearer_token() {
            Ok(())
        } else {
            Err(UsersServiceError::SignInRequired)
        }
    }
}

#[async_trait]
impl UsersService for HttpUsersService {
    async fn current_user(&self) -> Result<UserRecord, UsersServiceError> {
        self.ensure_session()?;

        Ok(self.api.get("api/users").await?)
    }

    async fn toggle_wishlist(&self, product: &ProductId) -> Result<UserRecord, UsersServiceError> {
        self.ensure_session()?;

        let body = ToggleWishlist {
            product_id: product,
        };

        Ok(self.api.post("api/users/wishlist", &body).await?)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Retrieves the signed-in customer's record.
    async fn current_user(&self) -> Result<UserRecord, UsersServiceError>;

    /// Adds `product` to the wishlist, or removes it if already saved, and returns the updated
    /// record.
    async fn toggle_wishlist(&self, product: &ProductId) -> Result<UserRecord, UsersServiceError>;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use httpmock::{Method::GET, Method::POST, MockServer};
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn client(server: &MockServer) -> TestResult<ApiClient> {
        Ok(ApiClient::new(server.base_url(), Duration::from_secs(5))?)
    }

    #[tokio::test]
    async fn current_user_sends_session_token() -> TestResult {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/users")
                    .header("authorization", "Bearer sess_1");
                then.status(200)
                    .json_body(json!({ "clerkId": "user_1", "wishlist": ["p1"] }));
            })
            .await;

        let service = HttpUsersService::new(client(&server)?.with_bearer_token("sess_1"));
        let user = service.current_user().await?;

        assert_eq!(user.wishlist, [ProductId::from("p1")]);
        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn toggle_posts_product_id() -> TestResult {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/users/wishlist")
                    .json_body(json!({ "productId": "p2" }));
                then.status(200)
                    .json_body(json!({ "clerkId": "user_1", "wishlist": ["p1", "p2"] }));
            })
            .await;

        let service = HttpUsersService::new(client(&server)?.with_bearer_token("sess_1"));
        let user = service.toggle_wishlist(&ProductId::from("p2")).await?;

        assert!(user.has_saved(&ProductId::from("p2")));
        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn missing_session_is_rejected_without_a_request() -> TestResult {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.path("/api/users");
                then.status(200);
            })
            .await;

        let service = HttpUsersService::new(client(&server)?);

        assert!(matches!(
            service.current_user().await,
            Err(UsersServiceError::SignInRequired)
        ));
        assert_eq!(mock.hits_async().await, 0);

        Ok(())
    }

    #[tokio::test]
    async fn expired_session_requires_sign_in() -> TestResult {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.path("/api/users");
                then.status(401);
            })
            .await;

        let service = HttpUsersService::new(client(&server)?.with_bearer_token("expired"));

        assert!(matches!(
            service.current_user().await,
            Err(UsersServiceError::SignInRequired)
        ));

        Ok(())
    }
}
