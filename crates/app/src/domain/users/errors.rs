//! Users service errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("sign in to use the wishlist")]
    SignInRequired,

    #[error("user request failed")]
    Api(#[source] ApiError),
}

impl From<ApiError> for UsersServiceError {
    fn from(error: ApiError) -> Self {
        match error.status() {
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => Self::SignInRequired,
            _ => Self::Api(error),
        }
    }
}
