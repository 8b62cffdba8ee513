//! Checkout

pub mod errors;
mod flow;
pub mod service;

pub use errors::{CheckoutServiceError, PlaceOrderError};
pub use flow::place_order;
pub use service::*;
