//! Cart line items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::{ProductId, ProductSnapshot};

/// One product + variant + quantity entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product display snapshot
    pub item: ProductSnapshot,

    /// Number of units, always at least one
    pub quantity: u32,

    /// Chosen colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Chosen size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl CartLineItem {
    /// Creates a line item. Blank colour or size values are treated as "not chosen".
    pub fn new(
        item: ProductSnapshot,
        quantity: u32,
        color: Option<String>,
        size: Option<String>,
    ) -> Self {
        Self {
            item,
            quantity,
            color: color.filter(|c| !c.trim().is_empty()),
            size: size.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Product this line refers to.
    pub fn product_id(&self) -> &ProductId {
        &self.item.id
    }

    /// Whether `other` is the same product in the same variant.
    pub fn same_variant(&self, other: &CartLineItem) -> bool {
        self.item.id == other.item.id && self.color == other.color && self.size == other.size
    }

    /// Unrounded `price × quantity` for this line.
    pub fn line_total(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(id: &str) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::from(id),
            title: "Jumper wires".to_string(),
            price: Decimal::new(2_550, 2),
            media: Vec::new(),
            colors: Vec::new(),
            sizes: Vec::new(),
        }
    }

    #[test]
    fn blank_variants_normalise_to_none() {
        let line = CartLineItem::new(snapshot("a"), 1, Some(String::new()), Some("  ".into()));

        assert_eq!(line.color, None);
        assert_eq!(line.size, None);
    }

    #[test]
    fn same_variant_compares_product_colour_and_size() {
        let red = CartLineItem::new(snapshot("a"), 1, Some("red".into()), None);
        let red_again = CartLineItem::new(snapshot("a"), 3, Some("red".into()), None);
        let blue = CartLineItem::new(snapshot("a"), 1, Some("blue".into()), None);
        let other = CartLineItem::new(snapshot("b"), 1, Some("red".into()), None);

        assert!(red.same_variant(&red_again));
        assert!(!red.same_variant(&blue));
        assert!(!red.same_variant(&other));
    }

    #[test]
    fn line_total_multiplies_price_by_quantity() {
        let line = CartLineItem::new(snapshot("a"), 3, None, None);

        assert_eq!(line.line_total(), Decimal::new(7_650, 2));
    }
}
