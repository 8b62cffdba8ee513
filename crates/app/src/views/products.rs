//! Catalogue views.

use std::io::{self, Write};

use storefront::{
    pricing::format_amount,
    products::{Collection, Product},
};
use tabled::builder::Builder;

use crate::views::render_table;

/// Writes the product list.
///
/// # Errors
///
/// Returns an error if `out` cannot be written to.
pub fn render_products(mut out: impl Write, products: &[Product]) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "No products found");
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Title", "Category", "Price", "Stock"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.title.clone(),
            product.category.clone(),
            format_amount(product.price),
            stock_label(product),
        ]);
    }

    writeln!(out, "{}", render_table(builder, 3..5))
}

/// Writes the collection list.
///
/// # Errors
///
/// Returns an error if `out` cannot be written to.
pub fn render_collections(mut out: impl Write, collections: &[Collection]) -> io::Result<()> {
    if collections.is_empty() {
        return writeln!(out, "No collections found");
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Title", "Products"]);

    for collection in collections {
        builder.push_record([
            collection.id.clone(),
            collection.title.clone(),
            collection.products.to_string(),
        ]);
    }

    writeln!(out, "{}", render_table(builder, 2..3))
}

/// Writes a product's detail page.
///
/// # Errors
///
/// Returns an error if `out` cannot be written to.
pub fn render_product(mut out: impl Write, product: &Product) -> io::Result<()> {
    writeln!(out, "{}", product.title)?;
    writeln!(out, "{}", format_amount(product.price))?;

    if !product.category.is_empty() {
        writeln!(out, "Category: {}", product.category)?;
    }

    if !product.description.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", product.description)?;
        writeln!(out)?;
    }

    if !product.colors.is_empty() {
        writeln!(out, "Colors: {}", product.colors.join(", "))?;
    }

    if !product.sizes.is_empty() {
        writeln!(out, "Sizes: {}", product.sizes.join(", "))?;
    }

    writeln!(out, "Stock: {}", stock_label(product))?;

    if let Some(datasheet) = product.datasheet() {
        writeln!(out, "Datasheet: {datasheet}")?;
    }

    if let Some(image) = product.image() {
        writeln!(out, "Image: {image}")?;
    }

    Ok(())
}

fn stock_label(product: &Product) -> String {
    if product.is_out_of_stock() {
        "Out of stock".to_string()
    } else {
        product.quantity.to_string()
    }
}
