//! Session Config

use clap::Args;
use storefront::identity::{CustomerIdentity, Session};

/// Signed-in customer, as handed over by the authentication provider.
#[derive(Debug, Args)]
pub struct SessionConfig {
    /// Customer id issued by the authentication provider
    #[arg(long, env = "STOREFRONT_CUSTOMER_ID")]
    pub customer_id: Option<String>,

    /// Customer email address
    #[arg(long, env = "STOREFRONT_CUSTOMER_EMAIL")]
    pub customer_email: Option<String>,

    /// Customer display name
    #[arg(long, env = "STOREFRONT_CUSTOMER_NAME")]
    pub customer_name: Option<String>,

    /// Session token for the user API
    #[arg(long, env = "STOREFRONT_SESSION_TOKEN", hide_env_values = true)]
    pub session_token: Option<String>,
}

impl SessionConfig {
    /// The session described by this configuration; anonymous unless id, email and name are
    /// all set.
    #[must_use]
    pub fn session(&self) -> Session {
        let customer = match (&self.customer_id, &self.customer_email, &self.customer_name) {
            (Some(id), Some(email), Some(name)) if !id.trim().is_empty() => {
                Some(CustomerIdentity {
                    id: id.clone(),
                    email: email.clone(),
                    name: name.clone(),
                })
            }
            _ => None,
        };

        Session::from(customer)
    }
}
