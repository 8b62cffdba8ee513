//! Products

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::CartLineItem;

/// Product identifier issued by the product API.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Product record as served by the catalogue API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier
    #[serde(rename = "_id")]
    pub id: ProductId,

    /// Display title
    pub title: String,

    /// Long description
    #[serde(default)]
    pub description: String,

    /// Image URLs, the first one is the primary image
    #[serde(default)]
    pub media: Vec<String>,

    /// Category label
    #[serde(default)]
    pub category: String,

    /// Collection identifiers the product belongs to
    #[serde(default)]
    pub collections: Vec<String>,

    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Unit cost to the shop
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub cost: Option<Decimal>,

    /// Available sizes
    #[serde(default)]
    pub sizes: Vec<String>,

    /// Available colours
    #[serde(default)]
    pub colors: Vec<String>,

    /// Units in stock
    #[serde(default)]
    pub quantity: u32,

    /// Datasheet download URL
    #[serde(default)]
    pub datasheet: Option<String>,

    /// Creation time
    pub created_at: Option<Timestamp>,

    /// Last update time
    pub updated_at: Option<Timestamp>,
}

impl Product {
    /// Whether the product can currently be added to a cart.
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    /// Primary image URL, if any.
    pub fn image(&self) -> Option<&str> {
        self.media.first().map(String::as_str)
    }

    /// Datasheet URL, ignoring blank values.
    pub fn datasheet(&self) -> Option<&str> {
        self.datasheet.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Captures the fields a cart line needs to display this product.
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id.clone(),
            title: self.title.clone(),
            price: self.price,
            media: self.media.clone(),
            colors: self.colors.clone(),
            sizes: self.sizes.clone(),
        }
    }
}

/// Display snapshot of a product held by a cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Product identifier
    #[serde(rename = "_id")]
    pub id: ProductId,

    /// Display title
    pub title: String,

    /// Unit price at the time the product was added
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Image URLs
    #[serde(default)]
    pub media: Vec<String>,

    /// Available colours
    #[serde(default)]
    pub colors: Vec<String>,

    /// Available sizes
    #[serde(default)]
    pub sizes: Vec<String>,
}

impl ProductSnapshot {
    /// Primary image URL, if any.
    pub fn image(&self) -> Option<&str> {
        self.media.first().map(String::as_str)
    }
}

/// Product collection (main category).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Display title
    pub title: String,

    /// Number of products in the collection
    #[serde(default)]
    pub products: u32,

    /// Cover image URL
    #[serde(default)]
    pub image: String,
}

/// Errors raised while turning a product selection into a cart line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The product has no stock left.
    #[error("{0} is out of stock")]
    OutOfStock(ProductId),

    /// The chosen colour is not offered for this product.
    #[error("colour {0:?} is not available")]
    UnknownColor(String),

    /// The chosen size is not offered for this product.
    #[error("size {0:?} is not available")]
    UnknownSize(String),

    /// A quantity of zero was requested.
    #[error("quantity must be at least 1")]
    InvalidQuantity,
}

/// Colour, size and quantity picked on a product page before adding to the cart.
#[derive(Debug, Clone)]
pub struct ProductSelection<'a> {
    product: &'a Product,
    color: Option<String>,
    size: Option<String>,
    quantity: u32,
}

impl<'a> ProductSelection<'a> {
    /// Starts a selection with the first colour and size preselected and a quantity of one.
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            color: product.colors.first().cloned(),
            size: product.sizes.first().cloned(),
            quantity: 1,
        }
    }

    /// Chooses a colour.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownColor`] if the product does not offer it.
    pub fn choose_color(&mut self, color: &str) -> Result<(), SelectionError> {
        if !self.product.colors.iter().any(|c| c == color) {
            return Err(SelectionError::UnknownColor(color.to_string()));
        }

        self.color = Some(color.to_string());

        Ok(())
    }

    /// Chooses a size.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownSize`] if the product does not offer it.
    pub fn choose_size(&mut self, size: &str) -> Result<(), SelectionError> {
        if !self.product.sizes.iter().any(|s| s == size) {
            return Err(SelectionError::UnknownSize(size.to_string()));
        }

        self.size = Some(size.to_string());

        Ok(())
    }

    /// Adds one to the selected quantity.
    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Removes one from the selected quantity, stopping at one.
    pub fn decrement(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    /// Sets the quantity directly.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidQuantity`] for zero; the quantity is left unchanged.
    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), SelectionError> {
        if quantity == 0 {
            return Err(SelectionError::InvalidQuantity);
        }

        self.quantity = quantity;

        Ok(())
    }

    /// Selected quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Selected colour.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Selected size.
    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Builds the cart line for this selection.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::OutOfStock`] when the product has no stock.
    pub fn into_line_item(self) -> Result<CartLineItem, SelectionError> {
        if self.product.is_out_of_stock() {
            return Err(SelectionError::OutOfStock(self.product.id.clone()));
        }

        Ok(CartLineItem::new(
            self.product.snapshot(),
            self.quantity,
            self.color,
            self.size,
        ))
    }
}
