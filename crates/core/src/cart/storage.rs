//! Cart persistence

use std::io;

use thiserror::Error;

use crate::cart::CartLineItem;

/// Errors raised by a cart storage backend.
#[derive(Debug, Error)]
pub enum CartStorageError {
    /// Reading or writing the backing store failed.
    #[error("cart storage I/O failed")]
    Io(#[from] io::Error),

    /// The stored cart could not be encoded or decoded.
    #[error("cart storage is not valid JSON")]
    Serde(#[from] serde_json::Error),
}

/// Where a cart keeps its line items between sessions.
///
/// A storage backend is owned by exactly one [`CartStore`](crate::cart::CartStore). When several
/// processes share the same backing store the last write wins.
pub trait CartStorage {
    /// Loads the persisted line items; an absent cart loads as empty.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStorageError`] if the persisted cart cannot be read.
    fn load(&self) -> Result<Vec<CartLineItem>, CartStorageError>;

    /// Replaces the persisted line items.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStorageError`] if the cart cannot be written.
    fn save(&mut self, items: &[CartLineItem]) -> Result<(), CartStorageError>;
}

/// In-memory storage, lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryCartStorage {
    items: Vec<CartLineItem>,
    saves: usize,
}

impl MemoryCartStorage {
    /// Creates storage preloaded with `items`.
    pub fn with_items(items: impl Into<Vec<CartLineItem>>) -> Self {
        Self {
            items: items.into(),
            saves: 0,
        }
    }

    /// Items as last saved.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl CartStorage for MemoryCartStorage {
    fn load(&self) -> Result<Vec<CartLineItem>, CartStorageError> {
        Ok(self.items.clone())
    }

    fn save(&mut self, items: &[CartLineItem]) -> Result<(), CartStorageError> {
        self.items = items.to_vec();
        self.saves += 1;

        Ok(())
    }
}

impl<S: CartStorage + ?Sized> CartStorage for &mut S {
    fn load(&self) -> Result<Vec<CartLineItem>, CartStorageError> {
        (**self).load()
    }

    fn save(&mut self, items: &[CartLineItem]) -> Result<(), CartStorageError> {
        (**self).save(items)
    }
}
