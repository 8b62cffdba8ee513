//! Storefront configuration

use clap::Args;

pub mod api;
pub mod logging;
pub mod session;
pub mod storage;

pub use api::ApiConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use session::SessionConfig;
pub use storage::StorageConfig;

/// Settings shared by every command, read from flags, the environment and `.env`.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Backend API settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Signed-in customer settings.
    #[command(flatten)]
    pub session: SessionConfig,

    /// Local file settings.
    #[command(flatten)]
    pub storage: StorageConfig,
}
