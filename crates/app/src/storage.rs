//! File-backed cart persistence.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use storefront::cart::{CartLineItem, CartStorage, CartStorageError};
use tracing::{debug, warn};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCart {
    #[serde(default)]
    cart_items: Vec<CartLineItem>,
}

/// Keeps the cart in a JSON file, `{"cartItems": [...]}`.
///
/// Writes go to a sibling temporary file that is then renamed over the cart, so a crash never
/// leaves a half-written cart behind. A file that cannot be decoded loads as an empty cart and is
/// replaced on the next save. Concurrent processes sharing the file overwrite each other;
/// the last write wins.
#[derive(Debug, Clone)]
pub struct FileCartStorage {
    path: PathBuf,
}

impl FileCartStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the cart file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();

        name.push(".tmp");

        self.path.with_file_name(name)
    }
}

impl CartStorage for FileCartStorage {
    fn load(&self) -> Result<Vec<CartLineItem>, CartStorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved cart");
                return Ok(Vec::new());
            }
            Err(error) => return Err(error.into()),
        };

        match serde_json::from_str::<StoredCart>(&contents) {
            Ok(stored) => Ok(stored.cart_items),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "discarding unreadable cart");
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, items: &[CartLineItem]) -> Result<(), CartStorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let stored = StoredCart {
            cart_items: items.to_vec(),
        };

        let temp = self.temp_path();

        fs::write(&temp, serde_json::to_vec_pretty(&stored)?)?;
        fs::rename(&temp, &self.path)?;

        debug!(path = %self.path.display(), lines = items.len(), "saved cart");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use storefront::{
        cart::CartStore,
        products::{ProductId, ProductSnapshot},
    };
    use tempfile::TempDir;
    use testresult::TestResult;

    use super::*;

    fn line(id: &str, quantity: u32) -> CartLineItem {
        CartLineItem::new(
            ProductSnapshot {
                id: ProductId::from(id),
                title: format!("Product {id}"),
                price: Decimal::new(9_950, 2),
                media: vec![format!("https://img.example/{id}.png")],
                colors: Vec::new(),
                sizes: vec!["M".to_string()],
            },
            quantity,
            None,
            Some("M".to_string()),
        )
    }

    #[test]
    fn missing_file_loads_empty() -> TestResult {
        let dir = TempDir::new()?;
        let storage = FileCartStorage::new(dir.path().join("cart.json"));

        assert!(storage.load()?.is_empty());

        Ok(())
    }

    #[test]
    fn cart_survives_reopening() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("cart.json");

        {
            let mut cart = CartStore::open(FileCartStorage::new(&path))?;

            cart.add_item(line("a", 2))?;
            cart.add_item(line("b", 1))?;
            cart.remove_item(&ProductId::from("b"))?;
        }

        let cart = CartStore::open(FileCartStorage::new(&path))?;

        assert_eq!(cart.items(), [line("a", 2)]);
        assert_eq!(cart.total_amount(), Decimal::from(199));
        assert!(!path.with_file_name("cart.json.tmp").exists());

        Ok(())
    }

    #[test]
    fn file_uses_cart_items_envelope() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("cart.json");
        let mut storage = FileCartStorage::new(&path);

        storage.save(&[line("a", 1)])?;

        let value: Value = serde_json::from_slice(&fs::read(&path)?)?;

        assert_eq!(
            value,
            json!({
                "cartItems": [{
                    "item": {
                        "_id": "a",
                        "title": "Product a",
                        "price": 99.5,
                        "media": ["https://img.example/a.png"],
                        "colors": [],
                        "sizes": ["M"]
                    },
                    "quantity": 1,
                    "size": "M"
                }]
            })
        );

        Ok(())
    }

    #[test]
    fn corrupt_file_loads_empty_and_is_replaced() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("cart.json");

        fs::write(&path, "{not json")?;

        let mut cart = CartStore::open(FileCartStorage::new(&path))?;

        assert!(cart.is_empty());

        cart.clear()?;

        let value: Value = serde_json::from_slice(&fs::read(&path)?)?;

        assert_eq!(value, json!({ "cartItems": [] }));

        Ok(())
    }
}
