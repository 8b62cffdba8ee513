//! Storefront Domain Services

pub mod checkout;
pub mod orders;
pub mod products;
pub mod users;
