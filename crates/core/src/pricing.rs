//! Pricing

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso};

use crate::cart::CartLineItem;

/// Currency every amount in the shop is quoted in.
pub const CURRENCY: &iso::Currency = iso::KES;

/// Number of decimal places totals are rounded to.
pub const TOTAL_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount half-up (away from zero) to two decimal places.
pub fn round_total(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(TOTAL_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates the rounded total of a list of line items.
///
/// Each line contributes `price × quantity`; rounding is applied once to the sum.
pub fn total_price(lines: &[CartLineItem]) -> Decimal {
    let sum = lines
        .iter()
        .fold(Decimal::ZERO, |acc, line| acc + line.line_total());

    round_total(sum)
}

/// Formats an amount in the shop currency, e.g. `KSh740.01`.
pub fn format_amount(amount: Decimal) -> String {
    Money::from_decimal(round_total(amount), CURRENCY).to_string()
}

#[cfg(test)]
mod tests {
    use crate::products::{ProductId, ProductSnapshot};

    use super::*;

    fn line(price: Decimal, quantity: u32) -> CartLineItem {
        let snapshot = ProductSnapshot {
            id: ProductId::from(format!("p-{price}")),
            title: "Item".to_string(),
            price,
            media: Vec::new(),
            colors: Vec::new(),
            sizes: Vec::new(),
        };

        CartLineItem::new(snapshot, quantity, None, None)
    }

    #[test]
    fn total_price_rounds_the_sum() {
        let lines = [line(Decimal::new(320_005, 3), 2), line(Decimal::new(100, 0), 1)];

        assert_eq!(total_price(&lines), Decimal::new(74_001, 2));
    }

    #[test]
    fn total_price_empty_is_zero() {
        assert_eq!(total_price(&[]), Decimal::ZERO);
    }

    #[test]
    fn round_total_rounds_midpoint_up() {
        assert_eq!(round_total(Decimal::new(125, 3)), Decimal::new(13, 2));
        assert_eq!(round_total(Decimal::new(135, 3)), Decimal::new(14, 2));
        assert_eq!(round_total(Decimal::new(1_234, 3)), Decimal::new(123, 2));
    }

    #[test]
    fn format_amount_contains_rounded_value() {
        let formatted = format_amount(Decimal::new(740_005, 3));

        assert!(formatted.contains("740.01"), "unexpected format: {formatted}");
    }
}
