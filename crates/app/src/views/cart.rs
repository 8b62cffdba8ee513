//! Cart view.

use std::io::{self, Write};

use storefront::{
    cart::CartLineItem,
    pricing::{format_amount, total_price},
};
use tabled::builder::Builder;

use crate::views::render_table;

/// Writes the cart's lines, the summary line and the rounded total.
///
/// # Errors
///
/// Returns an error if `out` cannot be written to.
pub fn render(mut out: impl Write, lines: &[CartLineItem]) -> io::Result<()> {
    if lines.is_empty() {
        return writeln!(out, "No item in cart");
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Product", "Color", "Size", "Price", "Qty", "Subtotal"]);

    for line in lines {
        builder.push_record([
            line.product_id().to_string(),
            line.item.title.clone(),
            line.color.clone().unwrap_or_default(),
            line.size.clone().unwrap_or_default(),
            format_amount(line.item.price),
            line.quantity.to_string(),
            format_amount(line.line_total()),
        ]);
    }

    writeln!(out, "{}", render_table(builder, 4..7))?;
    writeln!(out, "{}", summary_label(lines.len()))?;
    writeln!(out, "Total Amount: {}", format_amount(total_price(lines)))
}

/// `Summary (1 item)` / `Summary (3 items)`.
pub fn summary_label(count: usize) -> String {
    let noun = if count > 1 { "items" } else { "item" };

    format!("Summary ({count} {noun})")
}
