//! Products service errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("catalogue request failed")]
    Api(#[source] ApiError),
}

impl From<ApiError> for ProductsServiceError {
    fn from(error: ApiError) -> Self {
        match error.status() {
            Some(StatusCode::NOT_FOUND) => Self::NotFound,
            _ => Self::Api(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_status_maps_to_not_found() {
        let error = ProductsServiceError::from(ApiError::UnexpectedStatus {
            status: StatusCode::NOT_FOUND,
            body: String::new(),
        });

        assert!(matches!(error, ProductsServiceError::NotFound));
    }

    #[test]
    fn other_statuses_are_kept() {
        let error = ProductsServiceError::from(ApiError::UnexpectedStatus {
            status: StatusCode::BAD_GATEWAY,
            body: "upstream".to_string(),
        });

        assert!(matches!(error, ProductsServiceError::Api(_)));
    }
}
