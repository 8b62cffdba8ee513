use std::io::Write;

use clap::Args;
use storefront::products::ProductId;
use storefront_app::{context::AppContext, views::products};

use crate::cli::write_error;

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Product id
    id: String,
}

pub(crate) async fn products(context: &AppContext, out: impl Write) -> Result<(), String> {
    let list = context
        .products
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    products::render_products(out, &list).map_err(|error| write_error(&error))
}

pub(crate) async fn collections(context: &AppContext, out: impl Write) -> Result<(), String> {
    let list = context
        .products
        .list_collections()
        .await
        .map_err(|error| format!("failed to list collections: {error}"))?;

    products::render_collections(out, &list).map_err(|error| write_error(&error))
}

pub(crate) async fn product(
    context: &AppContext,
    args: ProductArgs,
    out: impl Write,
) -> Result<(), String> {
    let id = ProductId::from(args.id);

    let product = context
        .products
        .get_product(&id)
        .await
        .map_err(|error| format!("failed to fetch product: {error}"))?
        .ok_or_else(|| format!("product {id} not found"))?;

    products::render_product(out, &product).map_err(|error| write_error(&error))
}
