//! Wishlist

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::products::{Product, ProductId};

/// Shop-side record of a signed-in customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Provider-issued customer id
    pub clerk_id: String,

    /// Saved product ids, in the order they were saved
    #[serde(default)]
    pub wishlist: Vec<ProductId>,

    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl UserRecord {
    /// Whether `product` is on the wishlist.
    pub fn has_saved(&self, product: &ProductId) -> bool {
        self.wishlist.contains(product)
    }
}

/// One wishlist slot after resolving its product id.
#[derive(Debug, Clone, PartialEq)]
pub enum WishlistEntry {
    /// The product was found.
    Available(Box<Product>),

    /// The product no longer exists or could not be fetched.
    Unavailable(ProductId),
}

impl WishlistEntry {
    /// Id of the saved product.
    pub fn product_id(&self) -> &ProductId {
        match self {
            WishlistEntry::Available(product) => &product.id,
            WishlistEntry::Unavailable(id) => id,
        }
    }

    /// The product, if it was found.
    pub fn product(&self) -> Option<&Product> {
        match self {
            WishlistEntry::Available(product) => Some(product.as_ref()),
            WishlistEntry::Unavailable(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_user_record() -> TestResult {
        let user: UserRecord = serde_json::from_value(json!({
            "clerkId": "user_1",
            "wishlist": ["p2", "p1"],
            "createdAt": "2024-05-04T12:30:00Z",
            "updatedAt": "2024-05-05T08:00:00Z"
        }))?;

        assert_eq!(user.wishlist, [ProductId::from("p2"), ProductId::from("p1")]);
        assert!(user.has_saved(&ProductId::from("p1")));
        assert!(!user.has_saved(&ProductId::from("p3")));

        Ok(())
    }

    #[test]
    fn unavailable_entry_keeps_its_id() {
        let entry = WishlistEntry::Unavailable(ProductId::from("gone"));

        assert_eq!(entry.product_id().as_str(), "gone");
        assert_eq!(entry.product(), None);
    }
}
