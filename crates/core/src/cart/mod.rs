//! Cart

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{pricing::total_price, products::ProductId};

mod line_item;
mod storage;

pub use line_item::CartLineItem;
pub use storage::{CartStorage, CartStorageError, MemoryCartStorage};

/// Errors related to cart mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// A line item was added with a quantity of zero.
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// Adding to an existing line would overflow its quantity.
    #[error("quantity for {0} is too large")]
    QuantityOverflow(ProductId),

    /// No line in the cart refers to the product.
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    /// The updated cart could not be persisted; the cart is unchanged.
    #[error("failed to persist cart")]
    Storage(#[from] CartStorageError),
}

/// Owner of the cart's line items.
///
/// Every mutation is persisted before it becomes visible; a failed save leaves the cart as it
/// was. Line items are unique per product, colour and size.
#[derive(Debug)]
pub struct CartStore<S> {
    items: Vec<CartLineItem>,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Opens the cart persisted in `storage`.
    ///
    /// Loaded lines are tidied before use: blank colours and sizes become "not chosen", lines
    /// with a quantity of zero are dropped and repeated variants are merged.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError::Storage`] if the persisted cart cannot be loaded.
    pub fn open(storage: S) -> Result<Self, CartError> {
        let items = tidy(storage.load()?);

        Ok(Self { items, storage })
    }

    /// Adds a line, merging it into an existing line for the same product variant.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: the line has a quantity of zero.
    /// - [`CartError::QuantityOverflow`]: the merged quantity does not fit.
    /// - [`CartError::Storage`]: the cart could not be persisted.
    pub fn add_item(&mut self, line: CartLineItem) -> Result<(), CartError> {
        if line.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let mut items = self.items.clone();

        match items.iter_mut().find(|existing| existing.same_variant(&line)) {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(line.quantity)
                    .ok_or_else(|| CartError::QuantityOverflow(line.item.id.clone()))?;
            }
            None => items.push(line),
        }

        self.commit(items)
    }

    /// Adds one unit to every line of `product`.
    ///
    /// # Errors
    ///
    /// - [`CartError::NotInCart`]: no line refers to the product.
    /// - [`CartError::QuantityOverflow`]: a quantity is already at its maximum.
    /// - [`CartError::Storage`]: the cart could not be persisted.
    pub fn increase_quantity(&mut self, product: &ProductId) -> Result<(), CartError> {
        self.ensure_in_cart(product)?;

        let mut items = self.items.clone();

        for line in items.iter_mut().filter(|line| line.product_id() == product) {
            line.quantity = line
                .quantity
                .checked_add(1)
                .ok_or_else(|| CartError::QuantityOverflow(product.clone()))?;
        }

        self.commit(items)
    }

    /// Removes one unit from every line of `product` whose quantity is above one.
    ///
    /// Lines at quantity one are left alone; use [`CartStore::remove_item`] to drop them.
    ///
    /// # Errors
    ///
    /// - [`CartError::NotInCart`]: no line refers to the product.
    /// - [`CartError::Storage`]: the cart could not be persisted.
    pub fn decrease_quantity(&mut self, product: &ProductId) -> Result<(), CartError> {
        self.ensure_in_cart(product)?;

        let mut items = self.items.clone();
        let mut changed = false;

        for line in items
            .iter_mut()
            .filter(|line| line.product_id() == product && line.quantity > 1)
        {
            line.quantity -= 1;
            changed = true;
        }

        if !changed {
            return Ok(());
        }

        self.commit(items)
    }

    /// Removes every line of `product`.
    ///
    /// # Errors
    ///
    /// - [`CartError::NotInCart`]: no line refers to the product.
    /// - [`CartError::Storage`]: the cart could not be persisted.
    pub fn remove_item(&mut self, product: &ProductId) -> Result<(), CartError> {
        self.ensure_in_cart(product)?;

        let items = self
            .items
            .iter()
            .filter(|line| line.product_id() != product)
            .cloned()
            .collect();

        self.commit(items)
    }

    /// Empties the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError::Storage`] if the cart could not be persisted.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.commit(Vec::new())
    }

    /// Sum of `price × quantity` over all lines, rounded half-up to two decimals.
    pub fn total_amount(&self) -> Decimal {
        total_price(&self.items)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn ensure_in_cart(&self, product: &ProductId) -> Result<(), CartError> {
        if self.items.iter().any(|line| line.product_id() == product) {
            Ok(())
        } else {
            Err(CartError::NotInCart(product.clone()))
        }
    }

    fn commit(&mut self, items: Vec<CartLineItem>) -> Result<(), CartError> {
        self.storage.save(&items)?;
        self.items = items;

        Ok(())
    }
}

fn tidy(loaded: Vec<CartLineItem>) -> Vec<CartLineItem> {
    let mut items: Vec<CartLineItem> = Vec::with_capacity(loaded.len());

    for line in loaded {
        let line = CartLineItem::new(line.item, line.quantity, line.color, line.size);

        if line.quantity == 0 {
            continue;
        }

        match items.iter_mut().find(|existing| existing.same_variant(&line)) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => items.push(line),
        }
    }

    items
}
