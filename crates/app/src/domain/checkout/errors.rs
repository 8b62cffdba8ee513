//! Checkout errors.

use reqwest::StatusCode;
use storefront::checkout::CheckoutError;
use thiserror::Error;

use crate::api::ApiError;

/// Errors raised while submitting an order.
#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    #[error("could not reach the checkout service: {0}")]
    Http(#[source] reqwest::Error),

    #[error("checkout failed with status {status}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("checkout returned an unreadable response")]
    Decode(#[source] serde_json::Error),
}

impl From<ApiError> for CheckoutServiceError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Http(error) => Self::Http(error),
            ApiError::UnexpectedStatus { status, body } => Self::UnexpectedStatus { status, body },
            ApiError::Decode(error) => Self::Decode(error),
        }
    }
}

/// Errors raised by [`place_order`](crate::domain::checkout::place_order).
#[derive(Debug, Error)]
pub enum PlaceOrderError {
    /// The form refused to submit.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// The submission failed; the form can be corrected and submitted again.
    #[error("order submission failed: {0}")]
    Submission(String),

    /// The form discarded the result because another submission replaced it.
    #[error("order submission was superseded")]
    Superseded,
}
