//! Wishlist view.

use std::io::{self, Write};

use futures::future::join_all;
use storefront::{pricing::format_amount, wishlist::WishlistEntry};
use tabled::builder::Builder;
use tracing::{debug, warn};

use crate::{
    domain::{
        products::ProductsService,
        users::{UsersService, UsersServiceError},
    },
    views::render_table,
};

/// Resolves the signed-in customer's saved products, in the order they were saved.
///
/// Product lookups run concurrently. A product that no longer exists, or whose lookup fails,
/// becomes [`WishlistEntry::Unavailable`] instead of failing the whole wishlist. An empty
/// wishlist makes no product lookups at all.
///
/// # Errors
///
/// Returns an error if the customer's record cannot be fetched.
pub async fn load(
    users: &dyn UsersService,
    products: &dyn ProductsService,
) -> Result<Vec<WishlistEntry>, UsersServiceError> {
    let user = users.current_user().await?;

    if user.wishlist.is_empty() {
        debug!(customer = %user.clerk_id, "wishlist is empty");
        return Ok(Vec::new());
    }

    let lookups = user.wishlist.iter().map(|id| async move {
        match products.get_product(id).await {
            Ok(Some(product)) => WishlistEntry::Available(Box::new(product)),
            Ok(None) => {
                warn!(product = %id, "saved product no longer exists");
                WishlistEntry::Unavailable(id.clone())
            }
            Err(error) => {
                warn!(product = %id, %error, "failed to fetch saved product");
                WishlistEntry::Unavailable(id.clone())
            }
        }
    });

    Ok(join_all(lookups).await)
}

/// Writes the wishlist.
///
/// # Errors
///
/// Returns an error if `out` cannot be written to.
pub fn render(mut out: impl Write, entries: &[WishlistEntry]) -> io::Result<()> {
    writeln!(out, "Your Wishlist")?;

    if entries.is_empty() {
        return writeln!(out, "No items in your wishlist");
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Title", "Price", "Stock"]);

    for entry in entries {
        match entry.product() {
            Some(product) => builder.push_record([
                product.id.to_string(),
                product.title.clone(),
                format_amount(product.price),
                if product.is_out_of_stock() {
                    "Out of stock".to_string()
                } else {
                    product.quantity.to_string()
                },
            ]),
            None => builder.push_record([
                entry.product_id().to_string(),
                "Unavailable product".to_string(),
                String::new(),
                String::new(),
            ]),
        }
    }

    writeln!(out, "{}", render_table(builder, 2..4))
}
