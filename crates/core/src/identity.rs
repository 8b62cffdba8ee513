//! Customer identity

use serde::{Deserialize, Serialize};

/// Authenticated customer as reported by the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerIdentity {
    /// Provider-issued customer id
    #[serde(rename = "clerkId")]
    pub id: String,

    /// Primary email address
    pub email: String,

    /// Display name
    pub name: String,
}

/// Whether someone is signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Nobody is signed in.
    #[default]
    Anonymous,

    /// A customer is signed in.
    Authenticated(CustomerIdentity),
}

impl Session {
    /// Signed-in customer, if any.
    pub fn customer(&self) -> Option<&CustomerIdentity> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated(customer) => Some(customer),
        }
    }
}

impl From<Option<CustomerIdentity>> for Session {
    fn from(value: Option<CustomerIdentity>) -> Self {
        value.map_or(Session::Anonymous, Session::Authenticated)
    }
}
