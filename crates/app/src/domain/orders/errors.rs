//! Orders service errors.

use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order history request failed")]
    Api(#[from] ApiError),
}
