//! HTTP client for the storefront's backend APIs.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;

/// Errors raised by [`ApiClient`] requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    UnexpectedStatus {
        /// Response status
        status: StatusCode,

        /// Response body, as text
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// Status code of an unexpected-status error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            ApiError::Http(error) => error.status(),
            ApiError::Decode(_) => None,
        }
    }
}

/// JSON-over-HTTP client bound to one base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    bearer_token: Option<String>,
    http: Client,
}

impl ApiClient {
    /// Create a client for `base_url` whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token: None,
            http,
        })
    }

    /// Send `token` as a bearer token with every request.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Whether requests carry a bearer token.
    pub fn has_bearer_token(&self) -> bool {
        self.bearer_token.is_some()
    }

    /// Absolute URL of `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET` `path` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an unexpected body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);

        debug!(%url, "GET");

        self.send(self.http.get(&url)).await
    }

    /// `GET` `path`, treating `404 Not Found` and a `null` body as absent.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, any other non-success status, or an unexpected
    /// body.
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        match self.get::<Option<T>>(path).await {
            Ok(value) => Ok(value),
            Err(ApiError::UnexpectedStatus {
                status: StatusCode::NOT_FOUND,
                ..
            }) => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// `POST` `body` as JSON to `path` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an unexpected body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(path);

        debug!(%url, "POST");

        self.send(self.http.post(&url).json(body)).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus { status, body });
        }

        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}
