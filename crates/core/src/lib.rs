//! Storefront
//!
//! Storefront is the client-side core of a small online shop: product snapshots, a persistent cart,
//! shipping rates, the checkout form state machine and the read models for order history and
//! wishlists.

pub mod cart;
pub mod checkout;
pub mod identity;
pub mod orders;
pub mod payment;
pub mod pricing;
pub mod products;
pub mod shipping;
pub mod wishlist;
