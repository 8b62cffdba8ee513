//! API Config

use std::time::Duration;

use clap::Args;

/// Backend API settings.
#[derive(Debug, Args)]
pub struct ApiConfig {
    /// Product and order API base URL
    #[arg(long, env = "STOREFRONT_API_URL", default_value = "http://localhost:3000/api")]
    pub api_url: String,

    /// Storefront base URL, serving the session-authenticated user API
    #[arg(long, env = "STOREFRONT_URL", default_value = "http://localhost:3001")]
    pub store_url: String,

    /// HTTP request timeout in seconds.
    #[arg(long, env = "STOREFRONT_HTTP_TIMEOUT_SECONDS", default_value_t = 10u64)]
    pub http_timeout_seconds: u64,
}

impl ApiConfig {
    /// Request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }
}
