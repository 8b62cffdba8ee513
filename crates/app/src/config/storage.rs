//! Storage Config

use std::path::PathBuf;

use clap::Args;
use storefront::{
    cart::{CartError, CartStore},
    shipping::{ShippingError, ShippingRateTable},
};

use crate::storage::FileCartStorage;

/// Local file settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// File the cart is persisted to
    #[arg(long, env = "STOREFRONT_CART_PATH", default_value = ".storefront/cart.json")]
    pub cart_path: PathBuf,

    /// YAML shipping rate table replacing the built-in rates
    #[arg(long, env = "STOREFRONT_SHIPPING_RATES")]
    pub shipping_rates: Option<PathBuf>,
}

impl StorageConfig {
    /// Opens the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart file exists but cannot be read.
    pub fn open_cart(&self) -> Result<CartStore<FileCartStorage>, CartError> {
        CartStore::open(FileCartStorage::new(&self.cart_path))
    }

    /// The configured shipping rate table, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured rate file cannot be read or is invalid.
    pub fn rate_table(&self) -> Result<ShippingRateTable, ShippingError> {
        match &self.shipping_rates {
            Some(path) => ShippingRateTable::from_yaml_file(path),
            None => Ok(ShippingRateTable::default()),
        }
    }
}
